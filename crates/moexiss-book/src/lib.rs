//! Order book construction for the MOEX ISS client.
//!
//! This crate turns order book rows into price ladders:
//!
//! - [`build_book`] - Partition and sort rows into an [`OrderBook`]
//! - [`Ladder`] - One side of the book, ordered by price priority
//! - [`PriceLevel`] - A (price, quantity) pair

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod book;
mod error;
mod ladder;

pub use book::{MOSCOW_UTC_OFFSET_SECS, OrderBook, build_book};
pub use error::BookError;
pub use ladder::{Ladder, PriceLevel, Side};
