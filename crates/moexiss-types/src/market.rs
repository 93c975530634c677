//! Trading segment definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A trading segment: the ISS engine, market and primary board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Market {
    /// Trading engine (e.g., "stock", "futures").
    pub engine: &'static str,
    /// Market within the engine (e.g., "shares", "forts").
    pub market: &'static str,
    /// Primary board, if the segment's requests are scoped to one.
    pub board: Option<&'static str>,
}

impl Market {
    /// Shares on the main T+ board.
    pub const STOCK_SHARES: Self = Self::new("stock", "shares", Some("TQBR"));
    /// Futures on FORTS.
    pub const FORTS: Self = Self::new("futures", "forts", Some("RFUD"));
    /// Options on FORTS.
    pub const OPTIONS: Self = Self::new("futures", "options", Some("ROPD"));
    /// Bonds across all boards.
    pub const BONDS: Self = Self::new("stock", "bonds", None);

    /// Creates a market definition.
    #[must_use]
    pub const fn new(
        engine: &'static str,
        market: &'static str,
        board: Option<&'static str>,
    ) -> Self {
        Self {
            engine,
            market,
            board,
        }
    }

    /// Returns the same segment scoped to another board.
    #[must_use]
    pub const fn with_board(mut self, board: &'static str) -> Self {
        self.board = Some(board);
        self
    }

    /// Returns the segment's short name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.market
    }

    /// Returns all preset markets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::STOCK_SHARES, Self::FORTS, Self::OPTIONS, Self::BONDS]
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.board {
            Some(board) => write!(f, "{}/{}/{}", self.engine, self.market, board),
            None => write!(f, "{}/{}", self.engine, self.market),
        }
    }
}

impl FromStr for Market {
    type Err = MarketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stock" | "shares" | "tqbr" => Ok(Self::STOCK_SHARES),
            "forts" | "futures" | "rfud" => Ok(Self::FORTS),
            "options" | "ropd" => Ok(Self::OPTIONS),
            "bonds" => Ok(Self::BONDS),
            _ => Err(MarketParseError(s.to_string())),
        }
    }
}

/// AlgoPack market selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlgoMarket {
    /// Equities.
    #[default]
    Eq,
    /// Futures.
    Fo,
    /// Currencies.
    Fx,
}

impl AlgoMarket {
    /// Returns the path segment for this market.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Fo => "fo",
            Self::Fx => "fx",
        }
    }
}

impl std::fmt::Display for AlgoMarket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlgoMarket {
    type Err = MarketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eq" | "stock" | "shares" => Ok(Self::Eq),
            "fo" | "forts" | "futures" => Ok(Self::Fo),
            "fx" | "currency" => Ok(Self::Fx),
            _ => Err(MarketParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown market name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketParseError(String);

impl std::fmt::Display for MarketParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown market '{}'", self.0)
    }
}

impl std::error::Error for MarketParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_parse() {
        assert_eq!("stock".parse::<Market>().unwrap(), Market::STOCK_SHARES);
        assert_eq!("FORTS".parse::<Market>().unwrap(), Market::FORTS);
        assert_eq!("bonds".parse::<Market>().unwrap().board, None);
        assert!("crypto".parse::<Market>().is_err());
    }

    #[test]
    fn test_market_display() {
        assert_eq!(Market::STOCK_SHARES.to_string(), "stock/shares/TQBR");
        assert_eq!(Market::BONDS.to_string(), "stock/bonds");
        assert_eq!(
            Market::BONDS.with_board("TQOB").to_string(),
            "stock/bonds/TQOB"
        );
    }

    #[test]
    fn test_algo_market_parse() {
        assert_eq!("fo".parse::<AlgoMarket>().unwrap(), AlgoMarket::Fo);
        assert_eq!("EQ".parse::<AlgoMarket>().unwrap().as_str(), "eq");
        assert!("xx".parse::<AlgoMarket>().is_err());
    }
}
