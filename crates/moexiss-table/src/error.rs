//! Error types for table decoding.

use thiserror::Error;

use crate::{FieldKind, ScalarKind};

/// Errors that can occur while decoding a column table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table declares the same column name more than once.
    #[error("Duplicate column '{column}' in table header")]
    DuplicateColumn {
        /// The repeated column name.
        column: String,
    },

    /// The target record type cannot be decoded from a table.
    #[error("Record type {record} is not decodable: {reason}")]
    InvalidSchema {
        /// Name of the record type.
        record: &'static str,
        /// What is wrong with its field declarations.
        reason: String,
    },

    /// A row does not have one value per column.
    #[error("Row {row} has {actual} values, expected {expected}")]
    Shape {
        /// Zero-based row index.
        row: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },

    /// A value's kind does not match the declared field kind.
    #[error("Field '{field}' (column '{column}') expects {expected}, found {found}")]
    FieldType {
        /// Rust field name.
        field: &'static str,
        /// Source column name.
        column: &'static str,
        /// Declared field kind.
        expected: FieldKind,
        /// Kind of the raw value.
        found: ScalarKind,
    },
}

impl TableError {
    /// Returns true if the error is a schema problem rather than a data problem.
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(self, Self::DuplicateColumn { .. } | Self::InvalidSchema { .. })
    }
}
