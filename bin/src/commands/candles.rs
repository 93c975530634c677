//! Candles command implementation.

use crate::display::{Format, collect_pages, page_spinner, parse_date, parse_till, write_output};
use crate::session::Login;
use anyhow::Result;
use moexiss_lib::prelude::*;
use std::path::PathBuf;

/// Download candles of one security.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn candles(
    login: &Login,
    market: Market,
    symbol: &str,
    interval: Interval,
    from: &str,
    till: Option<&str>,
    output: Option<PathBuf>,
    format: Option<Format>,
    quiet: bool,
) -> Result<()> {
    let range = DateRange::new(parse_date(from)?, parse_till(till)?)?;
    let client = login.connect(false).await?;

    let progress = page_spinner(
        quiet,
        format!("{symbol} {interval} {} -> {}", range.start, range.end),
    )?;
    let pager = client.candles(market, symbol, interval, range);
    let candles = collect_pages(pager, &progress).await?;

    write_output(&candles, output.as_ref(), format)
}
