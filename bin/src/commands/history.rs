//! History dataset commands: trade statistics, open interest and option results.

use crate::display::{Format, collect_pages, page_spinner, write_output};
use crate::session::Login;
use anyhow::Result;
use moexiss_lib::prelude::*;
use std::path::PathBuf;

fn describe(dataset: &str, scope: &HistoryScope) -> String {
    match scope {
        HistoryScope::Symbol { symbol, range } => {
            format!("{dataset} {symbol} {} -> {}", range.start, range.end)
        }
        HistoryScope::Date(date) => format!("{dataset} {date}"),
    }
}

/// Download AlgoPack trade statistics.
pub(crate) async fn tradestats(
    login: &Login,
    market: AlgoMarket,
    scope: &HistoryScope,
    latest: bool,
    output: Option<PathBuf>,
    format: Option<Format>,
    quiet: bool,
) -> Result<()> {
    let client = login.connect(false).await?;
    let progress = page_spinner(quiet, describe("tradestats", scope))?;
    let stats = collect_pages(client.trade_stats(market, scope, latest), &progress).await?;
    write_output(&stats, output.as_ref(), format)
}

/// Download futures open interest.
pub(crate) async fn futoi(
    login: &Login,
    scope: &HistoryScope,
    latest: bool,
    output: Option<PathBuf>,
    format: Option<Format>,
    quiet: bool,
) -> Result<()> {
    let client = login.connect(false).await?;
    let progress = page_spinner(quiet, describe("futoi", scope))?;
    let rows = collect_pages(client.fut_oi(scope, latest), &progress).await?;
    write_output(&rows, output.as_ref(), format)
}

/// Download daily option results.
pub(crate) async fn option_history(
    login: &Login,
    scope: &HistoryScope,
    output: Option<PathBuf>,
    format: Option<Format>,
    quiet: bool,
) -> Result<()> {
    let client = login.connect(false).await?;
    let progress = page_spinner(quiet, describe("options", scope))?;
    let rows = collect_pages(client.option_history(scope), &progress).await?;
    write_output(&rows, output.as_ref(), format)
}
