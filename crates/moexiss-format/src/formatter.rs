//! Output format abstraction.

use moexiss_table::TableRecord;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter};

/// Output encoding of a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Comma-separated values with ISS column names as the header.
    #[default]
    Csv,
    /// One JSON array.
    Json,
    /// One JSON object per line.
    Ndjson,
    /// Apache Parquet with a schema derived from the record's fields.
    Parquet,
}

impl OutputFormat {
    /// File extension written by this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }

    /// Picks the format whose extension `path` carries, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        [Self::Csv, Self::Json, Self::Ndjson, Self::Parquet]
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Binary formats must not go to a terminal.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Parquet)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Failure while encoding records.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The format was not compiled into this build.
    #[error("{0} output is not enabled in this build")]
    Unsupported(OutputFormat),

    /// Writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record did not serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arrow or Parquet rejected a batch.
    #[error("Parquet error: {0}")]
    Parquet(String),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes records to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_records<R, W>(&self, records: &[R], writer: W) -> Result<(), FormatError>
    where
        R: TableRecord + Serialize,
        W: Write + Send;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Writes records with the default formatter for `format`.
///
/// # Errors
///
/// Returns an error if writing fails or the format was not compiled in.
pub fn write_records<R, W>(
    format: OutputFormat,
    records: &[R],
    writer: W,
) -> Result<(), FormatError>
where
    R: TableRecord + Serialize,
    W: Write + Send,
{
    match format {
        OutputFormat::Csv => CsvFormatter::new().write_records(records, writer),
        OutputFormat::Json => JsonFormatter::new().write_records(records, writer),
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_records(records, writer),
        #[cfg(feature = "parquet")]
        OutputFormat::Parquet => crate::ParquetFormatter::new().write_records(records, writer),
        #[cfg(not(feature = "parquet"))]
        OutputFormat::Parquet => Err(FormatError::Unsupported(format)),
    }
}
