//! Core types for the MOEX ISS client.
//!
//! This crate provides the data structures shared throughout moexiss:
//!
//! - [`IssError`] - Error returned by retrieval operations
//! - [`Candle`], [`TradeStats`], [`OrderBookRow`] and the other record schemas
//! - [`Interval`] - Candle period
//! - [`DateRange`] - Date bounds for history queries
//! - [`Market`] - Engine, market and board of a trading segment

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod interval;
mod market;
mod records;

pub use date_range::{DateRange, format_date};
pub use error::{DateRangeError, IssError, Result};
pub use interval::{Interval, IntervalParseError};
pub use market::{AlgoMarket, Market, MarketParseError};
pub use records::{
    BondInfo, Candle, FortsData, FortsInfo, FutOi, HistoryCursor, OptionData, OptionHistory,
    OptionInfo, OrderBookRow, StockData, StockInfo, TickerData, TickerInfo, TradeStats,
};

pub use moexiss_table::{ColumnTable, Scalar, TableError, TableRecord};
