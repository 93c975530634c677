//! Display utilities and output formatting for the moexiss CLI.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use moexiss_lib::prelude::*;
use moexiss_lib::{Transport, write_records};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Output format for downloaded data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
    Parquet,
}

impl Format {
    /// Returns the library format for this choice.
    pub(crate) const fn output_format(self) -> OutputFormat {
        match self {
            Self::Csv => OutputFormat::Csv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
            Self::Parquet => OutputFormat::Parquet,
        }
    }
}

/// Parses a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
}

/// Parses an optional end date, defaulting to today.
pub(crate) fn parse_till(s: Option<&str>) -> Result<NaiveDate> {
    s.map_or_else(|| Ok(chrono::Local::now().date_naive()), parse_date)
}

/// Builds a history scope: a symbol needs `--from`, no symbol means one `--date`.
pub(crate) fn history_scope(
    symbol: Option<&str>,
    date: Option<&str>,
    from: Option<&str>,
    till: Option<&str>,
) -> Result<HistoryScope> {
    match symbol {
        Some(symbol) => {
            if date.is_some() {
                bail!("--date selects all securities; use --from/--till with a symbol");
            }
            let from = from.context("--from is required when a symbol is given")?;
            let range = DateRange::new(parse_date(from)?, parse_till(till)?)?;
            Ok(HistoryScope::symbol(symbol, range))
        }
        None => {
            if from.is_some() || till.is_some() {
                bail!("--from/--till need a symbol; use --date for all securities");
            }
            Ok(HistoryScope::date(parse_till(date)?))
        }
    }
}

/// Creates a spinner that counts fetched pages.
pub(crate) fn page_spinner(quiet: bool, message: String) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} pages {msg}")?,
    );
    pb.set_message(message);
    Ok(pb)
}

/// Drains a paginator, ticking the spinner once per page. Ctrl-C cancels the session.
pub(crate) async fn collect_pages<T, R>(
    pager: Paginator<'_, T, R>,
    progress: &ProgressBar,
) -> Result<Vec<R>>
where
    T: Transport,
    R: TableRecord,
{
    let token = CancellationToken::new();
    let interrupt = token.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    let mut pager = pager.with_cancellation(token);
    let mut rows = Vec::new();
    let result = loop {
        match pager.next_page().await {
            Ok(Some(page)) => {
                rows.extend(page);
                progress.inc(1);
                progress.set_message(format!("{} rows", rows.len()));
            }
            Ok(None) => break Ok(rows),
            Err(e) => break Err(e),
        }
    };
    watcher.abort();

    match result {
        Ok(rows) => {
            progress.finish_with_message(format!("Downloaded {} rows", rows.len()));
            Ok(rows)
        }
        Err(e) => {
            progress.abandon_with_message("failed");
            Err(e.into())
        }
    }
}

/// Chooses the explicit format, else the one the output file's extension names, else CSV.
pub(crate) fn resolve_format(format: Option<Format>, output: Option<&PathBuf>) -> OutputFormat {
    format.map_or_else(
        || {
            output
                .and_then(|path| OutputFormat::from_path(path))
                .unwrap_or_default()
        },
        Format::output_format,
    )
}

/// Writes records to a file, or to stdout when no path is given.
pub(crate) fn write_output<R>(
    records: &[R],
    output: Option<&PathBuf>,
    format: Option<Format>,
) -> Result<()>
where
    R: TableRecord + Serialize,
{
    let format = resolve_format(format, output);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_records(format, records, BufWriter::new(file))?;
            tracing::info!(path = %path.display(), rows = records.len(), "output written");
        }
        None => {
            if format.is_binary() {
                bail!("{format} output needs --output");
            }
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout);
            write_records(format, records, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_scope_needs_from() {
        assert!(history_scope(Some("SBER"), None, None, None).is_err());
        let scope = history_scope(Some("SBER"), None, Some("2024-01-01"), Some("2024-01-31")).unwrap();
        assert_eq!(scope.symbol_name(), Some("SBER"));
    }

    #[test]
    fn test_date_scope() {
        let scope = history_scope(None, Some("2024-04-17"), None, None).unwrap();
        assert_eq!(
            scope,
            HistoryScope::date(NaiveDate::from_ymd_opt(2024, 4, 17).unwrap())
        );
        assert!(history_scope(None, None, Some("2024-01-01"), None).is_err());
    }

    #[test]
    fn test_format_follows_output_extension() {
        let path = PathBuf::from("sber.parquet");
        assert_eq!(resolve_format(None, Some(&path)), OutputFormat::Parquet);
        assert_eq!(resolve_format(Some(Format::Json), Some(&path)), OutputFormat::Json);
        assert_eq!(resolve_format(None, None), OutputFormat::Csv);
        assert_eq!(
            resolve_format(None, Some(&PathBuf::from("sber.txt"))),
            OutputFormat::Csv
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("17.04.2024").is_err());
    }
}
