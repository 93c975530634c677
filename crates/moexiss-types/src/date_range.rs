//! Date range for history queries.

use chrono::NaiveDate;

use crate::DateRangeError;

/// Date format used by the ISS `from`, `till` and `date` parameters.
const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive range of trading dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive), sent as `from`.
    pub start: NaiveDate,
    /// End date (inclusive), sent as `till`.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the `from` query value.
    #[must_use]
    pub fn from_param(&self) -> String {
        format_date(self.start)
    }

    /// Returns the `till` query value.
    #[must_use]
    pub fn till_param(&self) -> String {
        format_date(self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Formats a date the way ISS query parameters expect it (`YYYY-MM-DD`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
        assert_eq!(range.total_days(), 31);
    }

    #[test]
    fn test_date_range_invalid() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            DateRange::new(start, end),
            Err(DateRangeError::InvalidRange { start, end })
        );
    }

    #[test]
    fn test_query_params() {
        let start = NaiveDate::from_ymd_opt(2024, 8, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.from_param(), "2024-08-30");
        assert_eq!(range.till_param(), "2024-09-03");
    }

    #[test]
    fn test_single_day_contains() {
        let day = NaiveDate::from_ymd_opt(2024, 4, 17).unwrap();
        let range = DateRange::single_day(day);
        assert!(range.contains(day));
        assert!(!range.contains(day.succ_opt().unwrap()));
    }
}
