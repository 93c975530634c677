//! CSV output format.

use moexiss_table::{Scalar, TableRecord};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// The header holds the ISS column names of the record type. Null values are written as
/// empty fields; text containing the delimiter, a quote or a line break is quoted.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    fn escape(&self, field: &str) -> String {
        if field.contains([self.delimiter, '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn write_line<W: Write>(
        &self,
        writer: &mut W,
        fields: impl Iterator<Item = String>,
    ) -> Result<(), FormatError> {
        let line = fields
            .map(|field| self.escape(&field))
            .collect::<Vec<_>>()
            .join(&self.delimiter.to_string());
        writeln!(writer, "{line}")?;
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_records<R, W>(&self, records: &[R], mut writer: W) -> Result<(), FormatError>
    where
        R: TableRecord + Serialize,
        W: Write + Send,
    {
        if self.include_header {
            self.write_line(&mut writer, R::columns().map(str::to_string))?;
        }

        for record in records {
            let row = record.to_row();
            self.write_line(&mut writer, row.iter().map(Scalar::to_string))?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moexiss_types::{Candle, StockInfo};
    use std::io::Cursor;

    fn create_test_candle() -> Candle {
        Candle {
            open: 250.5,
            close: 251.0,
            high: 252.25,
            low: 249.0,
            value: 1_000_000.0,
            volume: 4000.0,
            begin: "2024-01-15 10:00:00".to_string(),
            end: "2024-01-15 10:59:59".to_string(),
        }
    }

    #[test]
    fn test_csv_records() {
        let formatter = CsvFormatter::new();
        let candles = vec![create_test_candle()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&candles, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0], "open,close,high,low,value,volume,begin,end");
        assert_eq!(
            lines[1],
            "250.5,251,252.25,249,1000000,4000,2024-01-15 10:00:00,2024-01-15 10:59:59"
        );
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let candles = vec![create_test_candle()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&candles, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("open,close"));
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let candles = vec![create_test_candle()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&candles, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("open\tclose\thigh"));
    }

    #[test]
    fn test_csv_quotes_text() {
        let info = StockInfo {
            sec_id: "SBER".to_string(),
            short_name: "Sber, \"ao\"".to_string(),
            ..StockInfo::default()
        };
        let mut output = Vec::new();

        CsvFormatter::new().write_records(&[info], &mut output).unwrap();

        let result = String::from_utf8(output).unwrap();
        let row = result.lines().nth(1).unwrap();
        assert!(row.starts_with("SBER,,\"Sber, \"\"ao\"\"\","));
    }
}
