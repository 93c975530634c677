//! Order book assembly from `orderbook` rows.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use moexiss_types::OrderBookRow;
use serde::{Deserialize, Serialize};

use crate::{BookError, Ladder, PriceLevel, Side};

/// Offset of Moscow time from UTC, in seconds. Moscow has not observed DST since 2014.
pub const MOSCOW_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Number of leading `SEQNUM` digits that encode the date as `YYYYMMDD`.
const SEQNUM_DATE_DIGITS: usize = 8;

/// Typical ladder depth: 10 levels for shares, 20 for futures.
const LADDER_CAPACITY: usize = 20;

/// A snapshot of the order book of one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Security code.
    pub sec_id: String,
    /// Board code.
    pub board_id: String,
    /// Bids, highest price first.
    pub bids: Ladder,
    /// Asks, lowest price first.
    pub asks: Ladder,
    /// Update sequence number of the snapshot.
    pub seq_num: i64,
    /// Update time of day, `HH:MM:SS` Moscow time.
    pub update_time: String,
    /// Price precision.
    pub decimals: i64,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self {
            sec_id: String::new(),
            board_id: String::new(),
            bids: Ladder::empty(Side::Buy),
            asks: Ladder::empty(Side::Sell),
            seq_num: 0,
            update_time: String::new(),
            decimals: 0,
        }
    }
}

impl OrderBook {
    /// Returns the best bid.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::NotFound`] if there are no bids.
    pub fn best_bid(&self) -> Result<PriceLevel, BookError> {
        self.bids
            .best()
            .ok_or(BookError::NotFound { side: Side::Buy })
    }

    /// Returns the best ask.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::NotFound`] if there are no asks.
    pub fn best_ask(&self) -> Result<PriceLevel, BookError> {
        self.asks
            .best()
            .ok_or(BookError::NotFound { side: Side::Sell })
    }

    /// Returns the ladder for a side.
    #[must_use]
    pub const fn ladder(&self, side: Side) -> &Ladder {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Returns the best ask minus the best bid, if both sides are quoted.
    #[must_use]
    pub fn spread(&self) -> Option<f64> {
        Some(self.asks.best()?.price - self.bids.best()?.price)
    }

    /// Returns true if both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Reconstructs the snapshot instant in Moscow time.
    ///
    /// The service does not send a date with the book. The first eight digits of the
    /// sequence number are the trading date (`YYYYMMDD`) and are combined with the
    /// update time of day.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::InvalidTimestamp`] if the sequence number has fewer than eight
    /// digits or the combined value is not a valid date and time.
    pub fn last_time(&self) -> Result<DateTime<FixedOffset>, BookError> {
        let invalid = || BookError::InvalidTimestamp {
            seq_num: self.seq_num,
            update_time: self.update_time.clone(),
        };

        let digits = self.seq_num.to_string();
        let date = digits.get(..SEQNUM_DATE_DIGITS).ok_or_else(invalid)?;
        let naive = NaiveDateTime::parse_from_str(
            &format!("{date} {}", self.update_time),
            "%Y%m%d %H:%M:%S",
        )
        .map_err(|_| invalid())?;

        let moscow = FixedOffset::east_opt(MOSCOW_UTC_OFFSET_SECS).ok_or_else(invalid)?;
        moscow.from_local_datetime(&naive).single().ok_or_else(invalid)
    }
}

impl std::fmt::Display for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BOOK {}", self.sec_id)?;
        match self.last_time() {
            Ok(time) => writeln!(f, "{}", time.format("%Y-%m-%dT%H:%M:%S%z"))?,
            Err(_) => writeln!(f, "{}", self.update_time)?,
        }

        if !self.asks.is_empty() {
            writeln!(f, "ASKS:")?;
            for level in self.asks.iter().rev() {
                writeln!(f, "- ASK: {level}")?;
            }
        }
        if !self.bids.is_empty() {
            writeln!(f, "BIDS:")?;
            for level in self.bids.iter() {
                writeln!(f, "- BID: {level}")?;
            }
        }
        Ok(())
    }
}

/// Builds an order book from `orderbook` rows.
///
/// Rows tagged `B` become bids and all other rows asks. Sequence number, update time and
/// precision are taken from the first row. Never fails: no rows give an empty book.
#[must_use]
pub fn build_book(rows: &[OrderBookRow]) -> OrderBook {
    let Some(first) = rows.first() else {
        return OrderBook::default();
    };

    let mut bids = Vec::with_capacity(LADDER_CAPACITY);
    let mut asks = Vec::with_capacity(LADDER_CAPACITY);
    for row in rows {
        let level = PriceLevel::new(row.price, row.quantity);
        match Side::from_tag(&row.buy_sell) {
            Side::Buy => bids.push(level),
            Side::Sell => asks.push(level),
        }
    }

    OrderBook {
        sec_id: first.sec_id.clone(),
        board_id: first.board_id.clone(),
        bids: Ladder::new(Side::Buy, bids),
        asks: Ladder::new(Side::Sell, asks),
        seq_num: first.seq_num,
        update_time: first.update_time.clone(),
        decimals: first.decimals,
    }
}
