//! Static schema descriptors for table records.

use crate::{Scalar, ScalarKind};

/// Kind of value a record field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 64-bit floating point.
    Float,
    /// 64-bit signed integer.
    Int,
    /// UTF-8 string.
    Text,
}

impl FieldKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "integer",
            Self::Text => "string",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A Rust type that can be stored in a record field.
///
/// Conversion from a [`Scalar`] follows the service's conventions: `null` maps to the
/// zero value, numbers stored in integer fields are truncated toward zero, and any other
/// mismatch is reported with the kind that was found.
pub trait ColumnValue: Sized {
    /// Declared kind of the field.
    const KIND: FieldKind;

    /// Converts a raw value, returning the raw kind on mismatch.
    ///
    /// # Errors
    ///
    /// Returns the [`ScalarKind`] of `value` if it cannot be stored in this type.
    fn from_scalar(value: &Scalar) -> Result<Self, ScalarKind>;

    /// Converts the value back to its wire representation.
    fn to_scalar(&self) -> Scalar;
}

impl ColumnValue for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_scalar(value: &Scalar) -> Result<Self, ScalarKind> {
        match value {
            Scalar::Null => Ok(0.0),
            Scalar::Number(n) => Ok(*n),
            other => Err(other.kind()),
        }
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::Number(*self)
    }
}

impl ColumnValue for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn from_scalar(value: &Scalar) -> Result<Self, ScalarKind> {
        match value {
            Scalar::Null => Ok(0),
            // `as` truncates toward zero and saturates out-of-range values.
            Scalar::Number(n) => Ok(n.trunc() as Self),
            other => Err(other.kind()),
        }
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::Number(*self as f64)
    }
}

impl ColumnValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_scalar(value: &Scalar) -> Result<Self, ScalarKind> {
        match value {
            Scalar::Null => Ok(Self::new()),
            Scalar::Text(s) => Ok(s.clone()),
            other => Err(other.kind()),
        }
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.clone())
    }
}

/// Descriptor of one record field: where it comes from and how to reach it.
pub struct Field<R> {
    /// Rust field name.
    pub name: &'static str,
    /// Source column name in the ISS table.
    pub column: &'static str,
    /// Declared value kind.
    pub kind: FieldKind,
    /// Stores a raw value into the field.
    pub set: fn(&mut R, &Scalar) -> Result<(), ScalarKind>,
    /// Reads the field back as a raw value.
    pub get: fn(&R) -> Scalar,
}

impl<R> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A record type decodable from a [`ColumnTable`](crate::ColumnTable).
///
/// Implementations are normally generated by [`table_record!`](crate::table_record).
/// Fields that have no matching column keep their [`Default`] value.
pub trait TableRecord: Default + 'static {
    /// Name of the record type, used in error messages.
    const NAME: &'static str;

    /// Field descriptors in declaration order.
    const FIELDS: &'static [Field<Self>];

    /// Returns the source column names in declaration order.
    fn columns() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|field| field.column)
    }

    /// Returns the record's values in declaration order.
    fn to_row(&self) -> Vec<Scalar> {
        Self::FIELDS.iter().map(|field| (field.get)(self)).collect()
    }
}

/// Declares a record struct together with its [`TableRecord`] column mapping.
///
/// Each field may name its source column with `=> "COLUMN"`; without it the field's
/// own identifier is used. Field types must implement [`ColumnValue`].
///
/// ```
/// use moexiss_table::{TableRecord, table_record};
///
/// table_record! {
///     #[derive(Debug, Default)]
///     pub struct Level {
///         pub price: f64 => "PRICE",
///         pub quantity: i64 => "QUANTITY",
///         pub side: String,
///     }
/// }
///
/// let columns: Vec<_> = Level::columns().collect();
/// assert_eq!(columns, ["PRICE", "QUANTITY", "side"]);
/// ```
#[macro_export]
macro_rules! table_record {
    (@column $field:ident) => {
        stringify!($field)
    };
    (@column $field:ident, $column:literal) => {
        $column
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $column:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::TableRecord for $name {
            const NAME: &'static str = stringify!($name);

            const FIELDS: &'static [$crate::Field<Self>] = &[
                $(
                    $crate::Field {
                        name: stringify!($field),
                        column: $crate::table_record!(@column $field $(, $column)?),
                        kind: <$ty as $crate::ColumnValue>::KIND,
                        set: |record, value| {
                            record.$field = <$ty as $crate::ColumnValue>::from_scalar(value)?;
                            Ok(())
                        },
                        get: |record| <$ty as $crate::ColumnValue>::to_scalar(&record.$field),
                    },
                )*
            ];
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    table_record! {
        #[derive(Debug, Default, PartialEq)]
        struct Sample {
            price: f64 => "PRICE",
            lots: i64 => "LOTS",
            board: String,
        }
    }

    #[test]
    fn test_declared_columns() {
        let columns: Vec<_> = Sample::columns().collect();
        assert_eq!(columns, ["PRICE", "LOTS", "board"]);
        assert_eq!(Sample::NAME, "Sample");
    }

    #[test]
    fn test_field_kinds() {
        let kinds: Vec<_> = Sample::FIELDS.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, [FieldKind::Float, FieldKind::Int, FieldKind::Text]);
    }

    #[test]
    fn test_int_truncates_toward_zero() {
        assert_eq!(i64::from_scalar(&Scalar::Number(7.9)), Ok(7));
        assert_eq!(i64::from_scalar(&Scalar::Number(-7.9)), Ok(-7));
        assert_eq!(i64::from_scalar(&Scalar::Null), Ok(0));
    }

    #[test]
    fn test_null_is_zero_value() {
        assert_relative_eq!(f64::from_scalar(&Scalar::Null).unwrap(), 0.0);
        assert_eq!(String::from_scalar(&Scalar::Null), Ok(String::new()));
    }

    #[test]
    fn test_kind_mismatch() {
        assert_eq!(
            f64::from_scalar(&Scalar::Text("1.5".into())),
            Err(ScalarKind::Text)
        );
        assert_eq!(
            String::from_scalar(&Scalar::Number(1.0)),
            Err(ScalarKind::Number)
        );
    }

    #[test]
    fn test_to_row_follows_declaration_order() {
        let sample = Sample {
            price: 101.5,
            lots: 3,
            board: "TQBR".to_string(),
        };
        assert_eq!(
            sample.to_row(),
            vec![
                Scalar::Number(101.5),
                Scalar::Number(3.0),
                Scalar::Text("TQBR".to_string())
            ]
        );
    }
}
