//! Accounting period model.
//!
//! This module contains the [`AccountingPeriod`] type that decides which
//! shifts count towards a total, and the [`PeriodFilter`] trait through which
//! the totals accept either a period or an arbitrary predicate.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Shift;

/// Decides whether a shift belongs to the period being totalled.
///
/// Implemented for [`AccountingPeriod`] and for any `Fn(&Shift) -> bool`.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{PeriodFilter, Shift};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00"));
///
/// let long_shifts = |s: &Shift| (s.end - s.start).num_hours() >= 8;
/// assert!(long_shifts.includes(&shift));
/// ```
pub trait PeriodFilter {
    /// Returns true if `shift` counts towards the period.
    fn includes(&self, shift: &Shift) -> bool;
}

impl<F> PeriodFilter for F
where
    F: Fn(&Shift) -> bool,
{
    fn includes(&self, shift: &Shift) -> bool {
        self(shift)
    }
}

/// A span of calendar time that shifts are attributed to by their start.
///
/// # Example
///
/// ```
/// use shift_earnings::models::AccountingPeriod;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-20 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let period = AccountingPeriod::month_of(now);
///
/// assert_eq!(period, AccountingPeriod::Month { year: 2026, month: 1 });
/// assert!(period.contains(NaiveDateTime::parse_from_str("2026-01-31 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap()));
/// assert!(!period.contains(NaiveDateTime::parse_from_str("2026-02-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccountingPeriod {
    /// A calendar month.
    Month {
        /// The calendar year.
        year: i32,
        /// The month, 1 to 12.
        month: u32,
    },
    /// A range of dates, both ends inclusive.
    DateRange {
        /// The first date of the range.
        start: NaiveDate,
        /// The last date of the range.
        end: NaiveDate,
    },
    /// Every shift, regardless of date.
    All,
}

impl AccountingPeriod {
    /// Returns the calendar month containing `instant`.
    pub fn month_of(instant: NaiveDateTime) -> Self {
        AccountingPeriod::Month {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// Returns true if `instant` falls within the period.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        match *self {
            AccountingPeriod::Month { year, month } => {
                instant.year() == year && instant.month() == month
            }
            AccountingPeriod::DateRange { start, end } => {
                let date = instant.date();
                date >= start && date <= end
            }
            AccountingPeriod::All => true,
        }
    }

    /// Returns the first instant of the period, or `None` for [`AccountingPeriod::All`]
    /// and for months that do not exist.
    pub fn start(&self) -> Option<NaiveDateTime> {
        let date = match *self {
            AccountingPeriod::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1)?,
            AccountingPeriod::DateRange { start, .. } => start,
            AccountingPeriod::All => return None,
        };
        date.and_hms_opt(0, 0, 0)
    }

    /// Returns the month before this one. Other periods are returned unchanged.
    pub fn previous(&self) -> Self {
        match *self {
            AccountingPeriod::Month { year, month: 1 } => AccountingPeriod::Month {
                year: year - 1,
                month: 12,
            },
            AccountingPeriod::Month { year, month } => AccountingPeriod::Month {
                year,
                month: month - 1,
            },
            other => other,
        }
    }

    /// Returns the month after this one. Other periods are returned unchanged.
    pub fn next(&self) -> Self {
        match *self {
            AccountingPeriod::Month { year, month: 12 } => AccountingPeriod::Month {
                year: year + 1,
                month: 1,
            },
            AccountingPeriod::Month { year, month } => AccountingPeriod::Month {
                year,
                month: month + 1,
            },
            other => other,
        }
    }
}

impl PeriodFilter for AccountingPeriod {
    fn includes(&self, shift: &Shift) -> bool {
        self.contains(shift.start)
    }
}
