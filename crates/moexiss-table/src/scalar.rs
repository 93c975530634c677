//! Wire-level table representation.

use serde::{Deserialize, Serialize};

use crate::TableRecord;

/// A loosely typed cell value as sent by the ISS service.
///
/// The service encodes every number as a JSON number (integers included) and uses
/// `null` for "not applicable" in both numeric and string columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Absent value.
    #[default]
    Null,
    /// Numeric value.
    Number(f64),
    /// String value.
    Text(String),
}

impl Scalar {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Null => ScalarKind::Null,
            Self::Number(_) => ScalarKind::Number,
            Self::Text(_) => ScalarKind::Text,
        }
    }

    /// Returns true if the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Kind of a raw [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `null`.
    Null,
    /// A JSON number.
    Number,
    /// A JSON string.
    Text,
}

impl ScalarKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::Text => "string",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tabular ISS block: ordered column names plus positional rows.
///
/// Column order is not stable across calls, so values must be resolved by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnTable {
    /// Column names.
    pub columns: Vec<String>,
    /// Rows of values, aligned with `columns`.
    #[serde(default)]
    pub data: Vec<Vec<Scalar>>,
}

impl ColumnTable {
    /// Creates a table from column names and rows.
    #[must_use]
    pub fn new(columns: Vec<String>, data: Vec<Vec<Scalar>>) -> Self {
        Self { columns, data }
    }

    /// Builds a table from typed records, using the record's column names as header.
    #[must_use]
    pub fn from_records<R: TableRecord>(records: &[R]) -> Self {
        let columns = R::columns().map(str::to_string).collect();
        let data = records.iter().map(TableRecord::to_row).collect();
        Self { columns, data }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_deserialize_kinds() {
        let row: Vec<Scalar> = serde_json::from_str(r#"[1.5, 7, "SBER", null]"#).unwrap();
        assert_eq!(row[0], Scalar::Number(1.5));
        assert_eq!(row[1], Scalar::Number(7.0));
        assert_eq!(row[2], Scalar::Text("SBER".to_string()));
        assert!(row[3].is_null());
    }

    #[test]
    fn test_scalar_rejects_booleans() {
        let result: Result<Scalar, _> = serde_json::from_str("true");
        assert!(result.is_err());
    }

    #[test]
    fn test_column_table_deserialize() {
        let table: ColumnTable =
            serde_json::from_str(r#"{"columns": ["a", "b"], "data": [[1, "x"], [null, "y"]]}"#)
                .unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.data[1][0].kind(), ScalarKind::Null);
    }

    #[test]
    fn test_column_table_missing_data() {
        let table: ColumnTable = serde_json::from_str(r#"{"columns": ["a"]}"#).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Null.to_string(), "");
        assert_eq!(Scalar::from(2.5).to_string(), "2.5");
        assert_eq!(Scalar::from("TQBR").to_string(), "TQBR");
    }
}
