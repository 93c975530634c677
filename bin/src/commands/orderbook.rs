//! Order book command implementation.

use crate::session::Login;
use anyhow::Result;
use moexiss_lib::prelude::*;

/// Print an order book snapshot with spread and depth.
pub(crate) async fn show_book(login: &Login, market: Market, symbol: &str) -> Result<()> {
    let client = login.connect(true).await?;
    let book = client.order_book(market, symbol).await?;

    if book.is_empty() {
        println!("Order book for {symbol} is empty.");
        return Ok(());
    }

    print!("{book}");
    println!("{}", "-".repeat(40));
    if let Some(spread) = book.spread() {
        println!("Spread:     {spread}");
    }
    println!("Bid depth:  {}", book.ladder(Side::Buy).sum_depth());
    println!("Ask depth:  {}", book.ladder(Side::Sell).sum_depth());
    Ok(())
}
