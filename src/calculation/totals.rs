//! Period totals.
//!
//! This module sums shift earnings over the shifts a [`PeriodFilter`]
//! selects. Shifts are visited in input order so repeated evaluations of the
//! same inputs produce identical totals.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AccountingPeriod, EarningsSummary, PeriodFilter, RateSchedule, Shift, TierHours,
};

use super::interval_earnings::sum_amounts;
use super::shift_earnings::{earnings_for_shift, shift_earnings};

/// Calculates what the shifts selected by `filter` have earned up to `now`.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::total_earnings;
/// use shift_earnings::models::{AccountingPeriod, RateSchedule, Shift};
/// use chrono::NaiveDateTime;
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
/// let shifts = vec![
///     Shift::new(at("2025-12-30 08:00:00"), at("2025-12-30 16:00:00")), // last month
///     Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00")),
///     Shift::new(at("2026-01-17 09:00:00"), at("2026-01-17 17:00:00")), // not started yet
/// ];
///
/// let now = at("2026-01-14 12:00:00");
/// let total = total_earnings(&shifts, now, &schedule, &AccountingPeriod::month_of(now));
/// assert_eq!(total, Decimal::new(800, 0));
/// ```
pub fn total_earnings<F>(
    shifts: &[Shift],
    now: NaiveDateTime,
    schedule: &RateSchedule,
    filter: &F,
) -> Decimal
where
    F: PeriodFilter + ?Sized,
{
    sum_amounts(
        shifts
            .iter()
            .filter(|shift| filter.includes(shift))
            .map(|shift| earnings_for_shift(shift, now, schedule)),
    )
}

/// Calculates what the shifts selected by `filter` pay once fully worked.
///
/// Each shift is evaluated at its own end, so planned shifts count in full.
pub fn scheduled_earnings<F>(shifts: &[Shift], schedule: &RateSchedule, filter: &F) -> Decimal
where
    F: PeriodFilter + ?Sized,
{
    sum_amounts(
        shifts
            .iter()
            .filter(|shift| filter.includes(shift))
            .map(|shift| earnings_for_shift(shift, shift.end, schedule)),
    )
}

/// Builds the per-shift and per-tier breakdown of `period` at `now`.
///
/// The summary's `total` equals [`total_earnings`] for the same inputs.
pub fn earnings_summary(
    shifts: &[Shift],
    now: NaiveDateTime,
    schedule: &RateSchedule,
    period: AccountingPeriod,
) -> EarningsSummary {
    let shift_breakdowns: Vec<_> = shifts
        .iter()
        .filter(|shift| period.includes(shift))
        .map(|shift| shift_earnings(shift, now, schedule))
        .collect();

    let mut hours_by_tier = TierHours::default();
    for segment in shift_breakdowns.iter().flat_map(|s| &s.segments) {
        hours_by_tier.add(segment.tier, segment.hours);
    }

    let total = sum_amounts(shift_breakdowns.iter().map(|s| s.amount));

    debug!(
        period = ?period,
        shifts_count = shift_breakdowns.len(),
        total = %total,
        "Earnings summary computed"
    );

    EarningsSummary {
        period,
        evaluated_at: now,
        shifts: shift_breakdowns,
        hours_by_tier,
        total,
    }
}
