//! Shift earnings calculation.
//!
//! This module evaluates a single shift up to an instant: the shift is
//! clamped to `now`, an unpaid break is cut out, and the remaining worked
//! windows are priced with [`earnings_for_interval`].

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{RateSchedule, Shift, ShiftEarnings, WorkInterval};

use super::interval_earnings::{earnings_for_interval, hours_in, segment_interval, sum_amounts};

/// Returns the windows of `shift` that count as worked at `now`.
///
/// The shift is evaluated up to `min(now, shift.end)`. When the shift has an
/// unpaid break, the result is up to two windows: the part before the break
/// and the part after it. A paid break or a missing break bound leaves the
/// shift as a single window. Empty windows are dropped, and a shift that has
/// not started yields nothing.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::worked_intervals;
/// use shift_earnings::models::{Shift, WorkInterval};
/// use chrono::{Duration, NaiveDateTime};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00"))
///     .with_break(at("2026-01-13 12:00:00"), at("2026-01-13 12:30:00"), false);
///
/// assert_eq!(
///     worked_intervals(&shift, at("2026-01-13 14:00:00")),
///     vec![
///         WorkInterval::new(at("2026-01-13 08:00:00"), at("2026-01-13 12:00:00")),
///         WorkInterval::new(at("2026-01-13 12:30:00"), at("2026-01-13 14:00:00")),
///     ]
/// );
/// ```
pub fn worked_intervals(shift: &Shift, now: NaiveDateTime) -> Vec<WorkInterval> {
    let Some(worked_until) = shift.worked_until(now) else {
        return Vec::new();
    };

    let intervals = match shift.break_window() {
        Some((break_start, break_end)) if !shift.break_paid => {
            let mut intervals = Vec::with_capacity(2);
            if shift.start < break_start {
                intervals.push(WorkInterval::new(shift.start, break_start.min(worked_until)));
            }
            if worked_until > break_end {
                intervals.push(WorkInterval::new(break_end.max(shift.start), worked_until));
            }
            intervals
        }
        _ => vec![WorkInterval::new(shift.start, worked_until)],
    };

    intervals.into_iter().filter(|i| !i.is_empty()).collect()
}

/// Returns the hours worked on `shift` up to `now`, excluding any unpaid break.
pub fn worked_hours(shift: &Shift, now: NaiveDateTime) -> Decimal {
    let worked = worked_intervals(shift, now)
        .iter()
        .fold(Duration::zero(), |total, interval| total + interval.duration());
    hours_in(worked)
}

/// Calculates what `shift` has earned up to `now`.
///
/// Returns zero if the shift has not started. Shifts are period-agnostic
/// here; selecting which shifts count is the caller's concern.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::earnings_for_shift;
/// use shift_earnings::models::{RateSchedule, Shift};
/// use chrono::{Duration, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let schedule = RateSchedule::new(
///     Decimal::new(100, 0),
///     Decimal::new(120, 0),
///     Decimal::new(150, 0),
///     Decimal::new(200, 0),
/// ).unwrap();
///
/// let shift = Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00"))
///     .with_break(at("2026-01-13 12:00:00"), at("2026-01-13 12:30:00"), false);
///
/// // 4h + 3.5h at the day rate
/// assert_eq!(earnings_for_shift(&shift, at("2026-01-13 16:00:00"), &schedule), Decimal::new(750, 0));
/// ```
pub fn earnings_for_shift(shift: &Shift, now: NaiveDateTime, schedule: &RateSchedule) -> Decimal {
    sum_amounts(
        worked_intervals(shift, now)
            .iter()
            .map(|i| earnings_for_interval(i.start, i.end, schedule)),
    )
}

/// Calculates the segment-level breakdown of `shift` up to `now`.
///
/// The `amount` of the result equals [`earnings_for_shift`] for the same inputs.
pub fn shift_earnings(shift: &Shift, now: NaiveDateTime, schedule: &RateSchedule) -> ShiftEarnings {
    let segments = worked_intervals(shift, now)
        .iter()
        .flat_map(|i| segment_interval(i.start, i.end, schedule))
        .collect();

    ShiftEarnings::from_segments(shift.id, shift.worked_until(now), segments)
}
