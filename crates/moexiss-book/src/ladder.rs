//! Price ladders.

use serde::{Deserialize, Serialize};

/// Side of the order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bids.
    Buy,
    /// Asks.
    Sell,
}

impl Side {
    /// Maps the `BUYSELL` tag to a side. The service only sends `B` and `S`; any tag other
    /// than `B` is read as a sell.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "B" { Self::Buy } else { Self::Sell }
    }

    /// Returns the side as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "bid",
            Self::Sell => "ask",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A price and the quantity quoted at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Level price.
    pub price: f64,
    /// Quantity in lots.
    pub quantity: i64,
}

impl PriceLevel {
    /// Creates a new level.
    #[must_use]
    pub const fn new(price: f64, quantity: i64) -> Self {
        Self { price, quantity }
    }

    /// Returns price times quantity.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.price, self.quantity)
    }
}

/// One side of the book, best level first.
///
/// Asks are ordered by ascending price, bids by descending price. Levels with equal prices
/// keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ladder {
    side: Side,
    levels: Vec<PriceLevel>,
}

impl Ladder {
    /// Builds a ladder, sorting the levels by the side's price priority.
    #[must_use]
    pub fn new(side: Side, mut levels: Vec<PriceLevel>) -> Self {
        // `sort_by` is stable.
        match side {
            Side::Buy => levels.sort_by(|a, b| b.price.total_cmp(&a.price)),
            Side::Sell => levels.sort_by(|a, b| a.price.total_cmp(&b.price)),
        }
        Self { side, levels }
    }

    /// Creates an empty ladder.
    #[must_use]
    pub const fn empty(side: Side) -> Self {
        Self {
            side,
            levels: Vec::new(),
        }
    }

    /// Returns the side of this ladder.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the best level, if any.
    #[must_use]
    pub fn best(&self) -> Option<PriceLevel> {
        self.levels.first().copied()
    }

    /// Returns the level at `depth`, counting from the best one at 0.
    #[must_use]
    pub fn level(&self, depth: usize) -> Option<PriceLevel> {
        self.levels.get(depth).copied()
    }

    /// Returns the total quantity across all levels, saturating at the `i64` bounds.
    #[must_use]
    pub fn sum_depth(&self) -> i64 {
        self.levels
            .iter()
            .fold(0i64, |total, level| total.saturating_add(level.quantity))
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the ladder has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the levels, best first.
    #[must_use]
    pub fn levels(&self) -> &[PriceLevel] {
        &self.levels
    }

    /// Iterates over the levels, best first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PriceLevel> {
        self.levels.iter()
    }
}
