//! Worked interval model.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A window of time that counts as worked, from `start` up to `end`.
///
/// An interval whose end is not after its start is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The start of the interval.
    pub start: NaiveDateTime,
    /// The end of the interval.
    pub end: NaiveDateTime,
}

impl WorkInterval {
    /// Creates an interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns true if the interval covers no time.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns the length of the interval, zero when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_earnings::models::WorkInterval;
    /// use chrono::{Duration, NaiveDateTime};
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let interval = WorkInterval::new(at("2026-01-13 08:00:00"), at("2026-01-13 12:00:00"));
    /// assert_eq!(interval.duration(), Duration::hours(4));
    ///
    /// let reversed = WorkInterval::new(at("2026-01-13 12:00:00"), at("2026-01-13 08:00:00"));
    /// assert_eq!(reversed.duration(), Duration::zero());
    /// ```
    pub fn duration(&self) -> Duration {
        if self.is_empty() {
            Duration::zero()
        } else {
            self.end - self.start
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_zero_length_interval_is_empty() {
        let t = make_datetime("2026-01-13 08:00:00");
        let interval = WorkInterval::new(t, t);
        assert!(interval.is_empty());
        assert_eq!(interval.duration(), Duration::zero());
    }

    #[test]
    fn test_interval_across_midnight() {
        let interval = WorkInterval::new(
            make_datetime("2026-01-13 22:00:00"),
            make_datetime("2026-01-14 06:00:00"),
        );
        assert!(!interval.is_empty());
        assert_eq!(interval.duration(), Duration::hours(8));
    }
}
