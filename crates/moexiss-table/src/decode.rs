//! Schema-driven decoding of column tables into typed records.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{ColumnTable, Field, Scalar, TableError, TableRecord};

/// Name to position lookup for a table header.
#[derive(Debug, Clone)]
pub struct ColumnIndex<'a> {
    positions: HashMap<&'a str, usize>,
    width: usize,
}

impl<'a> ColumnIndex<'a> {
    /// Builds the index, rejecting headers that repeat a column name.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] if a name occurs twice.
    pub fn new(columns: &'a [String]) -> Result<Self, TableError> {
        let mut positions = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            match positions.entry(name.as_str()) {
                Entry::Occupied(_) => {
                    return Err(TableError::DuplicateColumn {
                        column: name.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }
        Ok(Self {
            positions,
            width: columns.len(),
        })
    }

    /// Returns the position of a column, if present.
    #[must_use]
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Pairs every field of `R` that has a matching column with that column's position.
    fn bind<R: TableRecord>(&self) -> Vec<Binding<R>> {
        R::FIELDS
            .iter()
            .filter_map(|field| {
                self.position(field.column)
                    .map(|position| Binding { field, position })
            })
            .collect()
    }
}

/// A field resolved against a concrete header.
struct Binding<R: 'static> {
    field: &'static Field<R>,
    position: usize,
}

/// Decodes a column table into records of type `R`.
///
/// See [`decode_rows`] for the rules applied.
///
/// # Errors
///
/// Returns an error if the schema, the header or any row is invalid.
pub fn decode<R: TableRecord>(table: &ColumnTable) -> Result<Vec<R>, TableError> {
    decode_rows(&table.columns, &table.data)
}

/// Decodes positional rows into records of type `R`, resolving fields by column name.
///
/// - Fields without a matching column keep their default value.
/// - `null` values decode to the field's zero value.
/// - Numbers stored in integer fields are truncated toward zero.
/// - Output order matches input row order.
///
/// No record is produced unless the whole table decodes.
///
/// # Errors
///
/// - [`TableError::InvalidSchema`] if `R` declares no fields or maps two fields to one column.
/// - [`TableError::DuplicateColumn`] if the header repeats a name.
/// - [`TableError::Shape`] if any row's length differs from the header's.
/// - [`TableError::FieldType`] if a value's kind does not fit its field.
pub fn decode_rows<R: TableRecord>(
    columns: &[String],
    rows: &[Vec<Scalar>],
) -> Result<Vec<R>, TableError> {
    validate_schema::<R>()?;
    let index = ColumnIndex::new(columns)?;

    if let Some((row, values)) = rows
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() != index.width())
    {
        return Err(TableError::Shape {
            row,
            expected: index.width(),
            actual: values.len(),
        });
    }

    let bindings = index.bind::<R>();
    rows.iter()
        .map(|values| decode_row(&bindings, values))
        .collect()
}

fn decode_row<R: TableRecord>(bindings: &[Binding<R>], values: &[Scalar]) -> Result<R, TableError> {
    let mut record = R::default();
    for binding in bindings {
        let value = &values[binding.position];
        (binding.field.set)(&mut record, value).map_err(|found| TableError::FieldType {
            field: binding.field.name,
            column: binding.field.column,
            expected: binding.field.kind,
            found,
        })?;
    }
    Ok(record)
}

fn validate_schema<R: TableRecord>() -> Result<(), TableError> {
    if R::FIELDS.is_empty() {
        return Err(TableError::InvalidSchema {
            record: R::NAME,
            reason: "no fields declared".to_string(),
        });
    }

    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(R::FIELDS.len());
    for field in R::FIELDS {
        if let Some(previous) = seen.insert(field.column, field.name) {
            return Err(TableError::InvalidSchema {
                record: R::NAME,
                reason: format!(
                    "column '{}' is mapped by both '{}' and '{}'",
                    field.column, previous, field.name
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldKind, ScalarKind, table_record};
    use approx::assert_relative_eq;

    table_record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Quote {
            secid: String => "SECID",
            last: f64 => "LAST",
            qty: i64 => "QTY",
            board: String => "BOARDID",
        }
    }

    table_record! {
        #[derive(Debug, Default)]
        struct Clashing {
            first: f64 => "PRICE",
            second: f64 => "PRICE",
        }
    }

    #[derive(Debug, Default)]
    struct Empty;

    impl TableRecord for Empty {
        const NAME: &'static str = "Empty";
        const FIELDS: &'static [Field<Self>] = &[];
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn table() -> ColumnTable {
        serde_json::from_str(
            r#"{
                "columns": ["QTY", "SECID", "LAST", "BOARDID"],
                "data": [
                    [10, "SBER", 301.5, "TQBR"],
                    [3.0, "GAZP", 160.25, null],
                    [null, "LKOH", null, "TQBR"]
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_resolves_by_name() {
        let quotes: Vec<Quote> = decode(&table()).unwrap();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].secid, "SBER");
        assert_relative_eq!(quotes[0].last, 301.5);
        assert_eq!(quotes[0].qty, 10);
        assert_eq!(quotes[0].board, "TQBR");
        assert_eq!(quotes[1].secid, "GAZP");
        assert_eq!(quotes[2].secid, "LKOH");
    }

    #[test]
    fn test_nulls_decode_to_zero() {
        let quotes: Vec<Quote> = decode(&table()).unwrap();
        assert_eq!(quotes[1].board, "");
        assert_eq!(quotes[2].qty, 0);
        assert_relative_eq!(quotes[2].last, 0.0);
    }

    #[test]
    fn test_missing_column_keeps_default() {
        let cols = columns(&["SECID"]);
        let rows = vec![vec![Scalar::from("SBER")]];
        let quotes: Vec<Quote> = decode_rows(&cols, &rows).unwrap();
        assert_eq!(quotes[0].secid, "SBER");
        assert_eq!(quotes[0].qty, 0);
        assert_eq!(quotes[0].board, "");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let cols = columns(&["SECID", "UNKNOWN"]);
        let rows = vec![vec![Scalar::from("SBER"), Scalar::from(1.0)]];
        let quotes: Vec<Quote> = decode_rows(&cols, &rows).unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn test_fractional_integer_truncates() {
        let cols = columns(&["QTY"]);
        let rows = vec![vec![Scalar::from(9.99)], vec![Scalar::from(-2.5)]];
        let quotes: Vec<Quote> = decode_rows(&cols, &rows).unwrap();
        assert_eq!(quotes[0].qty, 9);
        assert_eq!(quotes[1].qty, -2);
    }

    #[test]
    fn test_shape_error_reports_row() {
        let cols = columns(&["SECID", "LAST"]);
        let rows = vec![
            vec![Scalar::from("SBER"), Scalar::from(1.0)],
            vec![Scalar::from("GAZP")],
        ];
        let result = decode_rows::<Quote>(&cols, &rows);
        assert_eq!(
            result,
            Err(TableError::Shape {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_shape_checked_before_type_errors() {
        // Row 0 has a type error, row 1 a shape error: the shape error wins.
        let cols = columns(&["SECID"]);
        let rows = vec![vec![Scalar::from(1.0)], vec![]];
        let result = decode_rows::<Quote>(&cols, &rows);
        assert!(matches!(result, Err(TableError::Shape { row: 1, .. })));
    }

    #[test]
    fn test_field_type_error() {
        let cols = columns(&["LAST"]);
        let rows = vec![vec![Scalar::from("301.5")]];
        let result = decode_rows::<Quote>(&cols, &rows);
        assert_eq!(
            result,
            Err(TableError::FieldType {
                field: "last",
                column: "LAST",
                expected: FieldKind::Float,
                found: ScalarKind::Text,
            })
        );
    }

    #[test]
    fn test_number_into_string_field_fails() {
        let cols = columns(&["SECID"]);
        let rows = vec![vec![Scalar::from(42.0)]];
        let result = decode_rows::<Quote>(&cols, &rows);
        assert!(matches!(
            result,
            Err(TableError::FieldType {
                found: ScalarKind::Number,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_header_is_schema_error() {
        let cols = columns(&["SECID", "SECID"]);
        let rows = vec![vec![Scalar::from("A"), Scalar::from("B")]];
        let err = decode_rows::<Quote>(&cols, &rows).unwrap_err();
        assert!(err.is_schema_error());
        assert_eq!(
            err,
            TableError::DuplicateColumn {
                column: "SECID".to_string()
            }
        );
    }

    #[test]
    fn test_clashing_schema_rejected() {
        let err = decode::<Clashing>(&ColumnTable::default()).unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidSchema {
                record: "Clashing",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_schema_rejected() {
        let err = decode::<Empty>(&ColumnTable::default()).unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_empty_table_yields_no_records() {
        let table = ColumnTable::new(columns(&["SECID"]), Vec::new());
        let quotes: Vec<Quote> = decode(&table).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_decode_is_idempotent() {
        let table = table();
        let first: Vec<Quote> = decode(&table).unwrap();
        let second: Vec<Quote> = decode(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_records_round_trip() {
        let quotes: Vec<Quote> = decode(&table()).unwrap();
        let rebuilt = ColumnTable::from_records(&quotes);
        assert_eq!(rebuilt.columns, ["SECID", "LAST", "QTY", "BOARDID"]);
        let again: Vec<Quote> = decode(&rebuilt).unwrap();
        assert_eq!(again, quotes);
    }

    #[test]
    fn test_column_index_position() {
        let cols = columns(&["A", "B"]);
        let index = ColumnIndex::new(&cols).unwrap();
        assert_eq!(index.position("B"), Some(1));
        assert_eq!(index.position("C"), None);
        assert_eq!(index.width(), 2);
    }
}
