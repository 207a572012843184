//! Live shift status.
//!
//! This module answers the per-tick questions a live display asks: which
//! shift is running, whether the worker is on a break, and what the current
//! hourly rate is.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{RateSchedule, Shift};

use super::rate_tier::rate_at;

/// Returns the current local wall-clock time.
///
/// The calculation functions never read the clock; hosts call this once per
/// tick and pass the result in as `now`.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Returns the first shift with `start <= now <= end`.
pub fn active_shift(shifts: &[Shift], now: NaiveDateTime) -> Option<&Shift> {
    shifts.iter().find(|shift| shift.contains(now))
}

/// Returns true if `now` falls inside a shift and inside that shift's break.
///
/// Both bounds are inclusive. Shifts without both break bounds never report
/// a break.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::is_on_break;
/// use shift_earnings::models::Shift;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let shifts = vec![
///     Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00"))
///         .with_break(at("2026-01-13 12:00:00"), at("2026-01-13 12:30:00"), false),
/// ];
///
/// assert!(is_on_break(&shifts, at("2026-01-13 12:10:00")));
/// assert!(!is_on_break(&shifts, at("2026-01-13 13:00:00")));
/// ```
pub fn is_on_break(shifts: &[Shift], now: NaiveDateTime) -> bool {
    shifts.iter().any(|shift| shift.is_on_break_at(now))
}

/// What a live display shows at one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStatus {
    /// The rate in force at the evaluated instant.
    pub hourly_rate: Decimal,
    /// Whether the worker is on a break.
    pub on_break: bool,
    /// The ID of the running shift, if any.
    pub active_shift_id: Option<Uuid>,
    /// Whether earnings are currently accruing.
    pub earning: bool,
}

/// Builds the [`LiveStatus`] at `now`.
///
/// Earnings accrue while a shift is running, except during an unpaid break.
pub fn live_status(shifts: &[Shift], now: NaiveDateTime, schedule: &RateSchedule) -> LiveStatus {
    let active = active_shift(shifts, now);
    let on_break = is_on_break(shifts, now);
    let earning =
        active.is_some_and(|shift| !(shift.has_unpaid_break() && shift.is_on_break_at(now)));

    LiveStatus {
        hourly_rate: rate_at(now, schedule),
        on_break,
        active_shift_id: active.map(|shift| shift.id),
        earning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn schedule() -> RateSchedule {
        RateSchedule::new(dec("100"), dec("120"), dec("150"), dec("200")).unwrap()
    }

    fn tuesday(time_str: &str) -> NaiveDateTime {
        make_datetime("2026-01-13", time_str)
    }

    fn shifts(break_paid: bool) -> Vec<Shift> {
        vec![
            Shift::new(tuesday("08:00:00"), tuesday("16:00:00")).with_break(
                tuesday("12:00:00"),
                tuesday("12:30:00"),
                break_paid,
            ),
            Shift::new(tuesday("18:00:00"), tuesday("22:00:00")),
        ]
    }

    // ==========================================================================
    // LS-001: Break window is inclusive at both ends
    // ==========================================================================
    #[test]
    fn test_ls_001_break_window_inclusive() {
        let shifts = shifts(false);
        assert!(is_on_break(&shifts, tuesday("12:00:00")));
        assert!(is_on_break(&shifts, tuesday("12:30:00")));
        assert!(!is_on_break(&shifts, tuesday("11:59:59")));
        assert!(!is_on_break(&shifts, tuesday("12:30:01")));
    }

    // ==========================================================================
    // LS-002: No break outside every shift
    // ==========================================================================
    #[test]
    fn test_ls_002_outside_shifts() {
        let shifts = shifts(false);
        assert!(!is_on_break(&shifts, tuesday("17:00:00")));
        assert!(!is_on_break(&shifts, tuesday("19:00:00")));
        assert!(!is_on_break(&[], tuesday("12:15:00")));
    }

    // ==========================================================================
    // LS-003: Break outside its shift is never reported
    // ==========================================================================
    #[test]
    fn test_ls_003_break_outside_shift_ignored() {
        let shifts = vec![Shift::new(tuesday("08:00:00"), tuesday("10:00:00")).with_break(
            tuesday("11:00:00"),
            tuesday("11:30:00"),
            false,
        )];
        assert!(!is_on_break(&shifts, tuesday("11:15:00")));
    }

    #[test]
    fn test_active_shift() {
        let shifts = shifts(false);
        assert_eq!(
            active_shift(&shifts, tuesday("19:00:00")).map(|s| s.id),
            Some(shifts[1].id)
        );
        assert!(active_shift(&shifts, tuesday("17:00:00")).is_none());
    }

    #[test]
    fn test_live_status_working() {
        let shifts = shifts(false);
        let status = live_status(&shifts, tuesday("19:00:00"), &schedule());
        assert_eq!(status.hourly_rate, dec("120"));
        assert!(!status.on_break);
        assert_eq!(status.active_shift_id, Some(shifts[1].id));
        assert!(status.earning);
    }

    #[test]
    fn test_live_status_unpaid_break_stops_earning() {
        let status = live_status(&shifts(false), tuesday("12:15:00"), &schedule());
        assert!(status.on_break);
        assert!(!status.earning);
        assert_eq!(status.hourly_rate, dec("100"));
    }

    #[test]
    fn test_live_status_paid_break_keeps_earning() {
        let status = live_status(&shifts(true), tuesday("12:15:00"), &schedule());
        assert!(status.on_break);
        assert!(status.earning);
    }

    #[test]
    fn test_live_status_off_shift() {
        let status = live_status(&shifts(false), tuesday("17:00:00"), &schedule());
        assert_eq!(status.active_shift_id, None);
        assert!(!status.earning);
        assert!(!status.on_break);
    }
}
