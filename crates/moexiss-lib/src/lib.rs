//! Rust client for the Moscow Exchange ISS market-data API.
//!
//! This is a facade crate that re-exports functionality from the moexiss
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use moexiss_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = IssClient::connect(ClientConfig::default()).await?;
//!
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//!     )?;
//!
//!     let candles = client
//!         .candles(Market::STOCK_SHARES, "SBER", Interval::Day1, range)
//!         .fetch_all()
//!         .await?;
//!     println!("Downloaded {} candles", candles.len());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use moexiss_types::*;

// Re-export the decoding engine
pub use moexiss_table::{
    ColumnIndex, ColumnValue, Field, FieldKind, decode, decode_rows, table_record,
};

// Re-export order books
#[cfg(feature = "book")]
pub use moexiss_book::{BookError, Ladder, OrderBook, PriceLevel, Side, build_book};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use moexiss_fetch::{
    CancellationToken, ClientConfig, Credentials, HistoryScope, HttpTransport, IssClient,
    IssRequest, IssResponse, PageState, Paginator, Ticker, Transport, TransportError,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use moexiss_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, write_records,
};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use moexiss_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use moexiss_lib::prelude::*;
/// ```
pub mod prelude {
    pub use moexiss_types::{
        AlgoMarket, Candle, DateRange, DateRangeError, FutOi, Interval, IssError, Market,
        OptionHistory, OrderBookRow, Result, TableRecord, TradeStats,
    };

    #[cfg(feature = "book")]
    pub use moexiss_book::{OrderBook, Side};

    #[cfg(feature = "fetch")]
    pub use moexiss_fetch::{
        CancellationToken, ClientConfig, Credentials, HistoryScope, IssClient, Paginator, Ticker,
    };

    #[cfg(feature = "format")]
    pub use moexiss_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use moexiss_format::ParquetFormatter;
}
