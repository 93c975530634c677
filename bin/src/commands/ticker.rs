//! Ticker command implementation.

use crate::session::Login;
use anyhow::Result;

/// Resolve a code and print its description and current quotes.
pub(crate) async fn show_ticker(login: &Login, code: &str) -> Result<()> {
    let client = login.connect(false).await?;
    let ticker = client.ticker(code).await?;

    println!("{} ({})", ticker.sec_id(), ticker.market());
    println!("Name:       {}", ticker.sec_name());
    println!("Short name: {}", ticker.short_name());
    println!("Type:       {}", ticker.sec_type());
    println!("Min step:   {}", ticker.min_step());
    if !ticker.asset_code().is_empty() {
        println!("Asset:      {}", ticker.asset_code());
        println!("Delivery:   {}", ticker.last_del_date());
    }

    let data = ticker.data().await?;
    println!("{}", "-".repeat(40));
    println!("Bid/offer:  {} / {}", data.bid, data.offer);
    println!("Last:       {} ({:+}%)", data.last, data.last_change_prcnt);
    println!("Trades:     {}", data.num_trades);
    println!("Updated:    {}", data.update_time);
    Ok(())
}
