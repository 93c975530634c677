//! Error types for moexiss.

use chrono::NaiveDate;
use moexiss_table::TableError;

use crate::MarketParseError;
use thiserror::Error;

/// Result type alias for moexiss operations.
pub type Result<T> = std::result::Result<T, IssError>;

/// Errors that can occur while retrieving and decoding ISS data.
#[derive(Error, Debug)]
pub enum IssError {
    /// The transport failed; the source error is opaque to the decoding core.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A table could not be decoded into records.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The response body is not valid ISS JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Unknown market name.
    #[error(transparent)]
    UnknownMarket(#[from] MarketParseError),

    /// No share or futures contract matches the code.
    #[error("Ticker not found: {0}")]
    TickerNotFound(String),

    /// The retrieval was cancelled by the caller.
    #[error("Request cancelled")]
    Cancelled,

    /// A paginated session was used again after it had failed.
    #[error("Pagination session already failed")]
    SessionFailed,
}

impl IssError {
    /// Wraps a transport-level error.
    pub fn transport(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(error))
    }

    /// Returns true if the error came from the transport.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
