//! Apache Parquet output format.

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field as ArrowField, Schema};
use arrow::record_batch::RecordBatch;
use moexiss_table::{Field, FieldKind, Scalar, TableRecord};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

use crate::{FormatError, Formatter};

/// Parquet formatter.
///
/// Columns are named after the record's Rust fields and typed from their [`FieldKind`].
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Creates the Arrow schema for a record type.
    fn record_schema<R: TableRecord>() -> Schema {
        Schema::new(
            R::FIELDS
                .iter()
                .map(|field| ArrowField::new(field.name, data_type(field.kind), false))
                .collect::<Vec<_>>(),
        )
    }

    /// Converts records to an Arrow `RecordBatch`.
    fn records_to_batch<R: TableRecord>(
        schema: &Arc<Schema>,
        records: &[R],
    ) -> Result<RecordBatch, FormatError> {
        let columns = R::FIELDS
            .iter()
            .map(|field| column_array(field, records))
            .collect();
        RecordBatch::try_new(Arc::clone(schema), columns)
            .map_err(|e| FormatError::Parquet(e.to_string()))
    }
}

const fn data_type(kind: FieldKind) -> DataType {
    match kind {
        FieldKind::Float => DataType::Float64,
        FieldKind::Int => DataType::Int64,
        FieldKind::Text => DataType::Utf8,
    }
}

fn column_array<R>(field: &Field<R>, records: &[R]) -> ArrayRef {
    let values = records.iter().map(|record| (field.get)(record));
    match field.kind {
        FieldKind::Float => Arc::new(Float64Array::from_iter_values(values.map(|v| match v {
            Scalar::Number(n) => n,
            _ => 0.0,
        }))),
        FieldKind::Int => Arc::new(Int64Array::from_iter_values(values.map(|v| match v {
            Scalar::Number(n) => n as i64,
            _ => 0,
        }))),
        FieldKind::Text => Arc::new(StringArray::from_iter_values(values.map(|v| match v {
            Scalar::Text(s) => s,
            _ => String::new(),
        }))),
    }
}

impl Formatter for ParquetFormatter {
    fn write_records<R, W>(&self, records: &[R], writer: W) -> Result<(), FormatError>
    where
        R: TableRecord + Serialize,
        W: Write + Send,
    {
        let schema = Arc::new(Self::record_schema::<R>());
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, Arc::clone(&schema), Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        for chunk in records.chunks(self.row_group_size.max(1)) {
            let batch = Self::records_to_batch(&schema, chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}
