//! Column table model and schema-driven decoding for the MOEX ISS client.
//!
//! This crate provides the generic half of the retrieval pipeline:
//!
//! - [`Scalar`] - A loosely typed wire value (number, string or null)
//! - [`ColumnTable`] - A block of named columns and positional rows
//! - [`TableRecord`] - A record type with a static column mapping
//! - [`table_record!`] - Declares a record struct together with its mapping
//! - [`decode`] - Converts a column table into typed records

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decode;
mod error;
mod scalar;
mod schema;

pub use decode::{ColumnIndex, decode, decode_rows};
pub use error::TableError;
pub use scalar::{ColumnTable, Scalar, ScalarKind};
pub use schema::{ColumnValue, Field, FieldKind, TableRecord};
