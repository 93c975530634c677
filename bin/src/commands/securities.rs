//! Securities command implementation.

use crate::display::{Format, write_output};
use crate::session::Login;
use anyhow::{Result, bail};
use moexiss_lib::prelude::*;
use std::path::PathBuf;

/// Show descriptions or current market data of securities.
pub(crate) async fn securities(
    login: &Login,
    market: Market,
    symbols: &[String],
    board: Option<&str>,
    data: bool,
    output: Option<PathBuf>,
    format: Option<Format>,
) -> Result<()> {
    let client = login.connect(false).await?;
    let output = output.as_ref();

    match (market.market, data) {
        ("shares", false) => write_output(&client.stock_info(symbols).await?, output, format),
        ("shares", true) => write_output(&client.stock_data(symbols).await?, output, format),
        ("forts", false) => write_output(&client.forts_info(symbols).await?, output, format),
        ("forts", true) => write_output(&client.forts_data(symbols).await?, output, format),
        ("options", false) => write_output(&client.options_info(symbols).await?, output, format),
        ("options", true) => write_output(&client.options_data(symbols).await?, output, format),
        ("bonds", false) => {
            if !symbols.is_empty() {
                bail!("Bonds are listed by board; use --board instead of symbols");
            }
            let bonds = client.bonds_info(board.unwrap_or_default()).await?;
            write_output(&bonds, output, format)
        }
        _ => bail!(
            "{} {} is not available",
            market,
            if data { "market data" } else { "descriptions" }
        ),
    }
}
