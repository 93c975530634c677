//! Benchmark fixtures for moexiss.

use async_trait::async_trait;
use bytes::Bytes;
use moexiss_lib::{ColumnTable, OrderBookRow, Scalar, Transport, TransportError};
use reqwest::Url;
use serde_json::json;

/// Candle columns in an order different from the record's declaration order.
pub const CANDLE_COLUMNS: [&str; 8] = [
    "begin", "end", "volume", "value", "low", "high", "close", "open",
];

/// Builds a candle table with `rows` rows.
pub fn candle_table(rows: usize) -> ColumnTable {
    let columns = CANDLE_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let data = (0..rows).map(candle_row).collect();
    ColumnTable::new(columns, data)
}

fn candle_row(i: usize) -> Vec<Scalar> {
    let base = 250.0 + (i % 100) as f64 * 0.01;
    vec![
        Scalar::from(format!("2024-01-03 10:{:02}:00", i % 60)),
        Scalar::from(format!("2024-01-03 10:{:02}:59", i % 60)),
        Scalar::from(1000.0 + i as f64),
        Scalar::from(base * 1000.0),
        Scalar::from(base - 0.5),
        Scalar::from(base + 0.5),
        if i % 10 == 0 { Scalar::Null } else { Scalar::from(base + 0.1) },
        Scalar::from(base),
    ]
}

/// Builds `levels` order book rows per side, interleaved and unsorted.
pub fn book_rows(levels: usize) -> Vec<OrderBookRow> {
    (0..levels * 2)
        .map(|i| {
            let offset = ((i * 7) % levels) as f64 * 0.01;
            let (side, price) = if i % 2 == 0 {
                ("B", 99.99 - offset)
            } else {
                ("S", 100.01 + offset)
            };
            OrderBookRow {
                sec_id: "SBER".to_string(),
                board_id: "TQBR".to_string(),
                buy_sell: side.to_string(),
                price,
                quantity: (i as i64 % 50) + 1,
                seq_num: 20_240_711_103_838,
                update_time: "10:38:38".to_string(),
                decimals: 2,
            }
        })
        .collect()
}

/// Serves `total` candle rows in pages of `page_size`, keyed by the `start` parameter.
#[derive(Debug, Clone)]
pub struct PagedTransport {
    total: usize,
    page_size: usize,
}

impl PagedTransport {
    /// Creates a transport holding `total` rows.
    pub const fn new(total: usize, page_size: usize) -> Self {
        Self { total, page_size }
    }

    fn page(&self, start: usize) -> Bytes {
        let end = (start + self.page_size).min(self.total);
        let rows: Vec<_> = (start.min(end)..end).map(candle_row).collect();
        let body = json!({ "candles": { "columns": CANDLE_COLUMNS, "data": rows } });
        Bytes::from(body.to_string())
    }
}

#[async_trait]
impl Transport for PagedTransport {
    async fn get(&self, url: &Url, _authorized: bool) -> Result<Bytes, TransportError> {
        let start = url
            .query_pairs()
            .find(|(name, _)| name == "start")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(0);
        Ok(self.page(start))
    }
}
