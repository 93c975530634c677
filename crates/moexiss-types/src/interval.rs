//! Candle period definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Candle period accepted by the ISS `interval` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1-minute candles.
    #[serde(rename = "M1")]
    Minute1,
    /// 10-minute candles.
    #[serde(rename = "M10")]
    Minute10,
    /// 1-hour candles.
    #[serde(rename = "H1")]
    Hour1,
    /// Daily candles.
    #[default]
    #[serde(rename = "D1")]
    Day1,
    /// Weekly candles.
    #[serde(rename = "W1")]
    Week1,
    /// Monthly candles.
    #[serde(rename = "MN1")]
    Month1,
    /// Quarterly candles.
    #[serde(rename = "Q1")]
    Quarter1,
}

impl Interval {
    /// Returns the numeric code sent as the `interval` query parameter.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Minute1 => 1,
            Self::Minute10 => 10,
            Self::Hour1 => 60,
            Self::Day1 => 24,
            Self::Week1 => 7,
            Self::Month1 => 31,
            Self::Quarter1 => 4,
        }
    }

    /// Looks up an interval by its numeric code.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Minute1),
            10 => Some(Self::Minute10),
            60 => Some(Self::Hour1),
            24 => Some(Self::Day1),
            7 => Some(Self::Week1),
            31 => Some(Self::Month1),
            4 => Some(Self::Quarter1),
            _ => None,
        }
    }

    /// Returns the interval as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "M1",
            Self::Minute10 => "M10",
            Self::Hour1 => "H1",
            Self::Day1 => "D1",
            Self::Week1 => "W1",
            Self::Month1 => "MN1",
            Self::Quarter1 => "Q1",
        }
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute10,
            Self::Hour1,
            Self::Day1,
            Self::Week1,
            Self::Month1,
            Self::Quarter1,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "M1" | "1M" | "1" => Ok(Self::Minute1),
            "M10" | "10M" | "10" => Ok(Self::Minute10),
            "H1" | "1H" | "60" => Ok(Self::Hour1),
            "D1" | "1D" | "DAY" | "DAILY" | "24" => Ok(Self::Day1),
            "W1" | "1W" | "WEEK" | "7" => Ok(Self::Week1),
            "MN1" | "MONTH" | "31" => Ok(Self::Month1),
            "Q1" | "QUARTER" | "4" => Ok(Self::Quarter1),
            _ => Err(IntervalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: M1, M10, H1, D1, W1, MN1, Q1",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}
