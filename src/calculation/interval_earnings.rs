//! Interval segmentation and earnings.
//!
//! This module splits a time window at every calendar hour boundary so that
//! each piece lies in a single hour of a single day. The rate tier is then
//! constant across a piece and its earnings are exact.

use chrono::{Duration, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::models::{EarningsSegment, RateSchedule};

use super::rate_tier::get_rate_tier;

const SECONDS_PER_HOUR: i64 = 3_600;

/// Returns the start of the calendar hour after `instant`.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::next_hour_boundary;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(next_hour_boundary(at("2026-01-13 07:30:00")), at("2026-01-13 08:00:00"));
/// assert_eq!(next_hour_boundary(at("2026-01-13 08:00:00")), at("2026-01-13 09:00:00"));
/// assert_eq!(next_hour_boundary(at("2026-01-13 23:15:00")), at("2026-01-14 00:00:00"));
/// ```
pub fn next_hour_boundary(instant: NaiveDateTime) -> NaiveDateTime {
    let hour_start = instant
        .date()
        .and_hms_opt(instant.hour(), 0, 0)
        .expect("Valid start of hour");
    hour_start + Duration::hours(1)
}

/// Iterates the hour-aligned pieces of `[start, end)`.
struct HourPieces {
    cursor: NaiveDateTime,
    end: NaiveDateTime,
}

impl Iterator for HourPieces {
    type Item = (NaiveDateTime, NaiveDateTime);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let piece_start = self.cursor;
        let piece_end = next_hour_boundary(piece_start).min(self.end);
        self.cursor = piece_end;
        Some((piece_start, piece_end))
    }
}

fn hour_pieces(start: NaiveDateTime, end: NaiveDateTime) -> HourPieces {
    HourPieces { cursor: start, end }
}

/// Converts a duration into fractional seconds, down to the nanosecond.
fn seconds_in(duration: Duration) -> Decimal {
    Decimal::from(duration.num_seconds()) + Decimal::new(i64::from(duration.subsec_nanos()), 9)
}

/// Converts a duration into fractional hours.
pub(crate) fn hours_in(duration: Duration) -> Decimal {
    seconds_in(duration) / Decimal::from(SECONDS_PER_HOUR)
}

/// Earnings for `duration` at an hourly `rate`, unrounded.
///
/// Multiplies before dividing to keep whole-minute amounts exact. Rates too
/// large for that product are priced as `hours * rate`, which cannot
/// overflow for pieces of at most one hour.
fn amount_for(duration: Duration, rate: Decimal) -> Decimal {
    match seconds_in(duration).checked_mul(rate) {
        Some(product) => product / Decimal::from(SECONDS_PER_HOUR),
        None => hours_in(duration).saturating_mul(rate),
    }
}

/// Sums amounts, saturating at [`Decimal::MAX`].
pub(crate) fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Splits `[start, end)` into rate-homogeneous segments.
///
/// Segments are chronological, contiguous and never cross a calendar hour.
/// A reversed or empty window yields no segments.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::segment_interval;
/// use shift_earnings::models::{RateSchedule, RateTier};
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
/// // Tuesday 07:30 to 09:15
/// let segments = segment_interval(at("2026-01-13 07:30:00"), at("2026-01-13 09:15:00"), &schedule);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].tier, RateTier::Night);
/// assert_eq!(segments[0].amount, Decimal::new(75, 0));
/// assert_eq!(segments[1].tier, RateTier::Day);
/// assert_eq!(segments[2].hours, Decimal::new(25, 2));
/// ```
pub fn segment_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
    schedule: &RateSchedule,
) -> Vec<EarningsSegment> {
    hour_pieces(start, end)
        .map(|(piece_start, piece_end)| {
            let tier = get_rate_tier(piece_start);
            let rate = schedule.rate_for(tier);
            let duration = piece_end - piece_start;
            EarningsSegment {
                start: piece_start,
                end: piece_end,
                tier,
                rate,
                hours: hours_in(duration),
                amount: amount_for(duration, rate),
            }
        })
        .collect()
}

/// Calculates the earnings for the window `[start, end)`.
///
/// The window is walked one calendar hour at a time; each piece earns
/// `(duration / 1h) * rate` at the rate in force at its start. Amounts are
/// summed without intermediate rounding. Returns zero when `end <= start`.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::earnings_for_interval;
/// use shift_earnings::models::RateSchedule;
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
/// // Tuesday 07:00 to 19:00: 1h night + 10h day + 1h evening
/// let amount = earnings_for_interval(at("2026-01-13 07:00:00"), at("2026-01-13 19:00:00"), &schedule);
/// assert_eq!(amount, Decimal::new(1270, 0));
/// ```
pub fn earnings_for_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
    schedule: &RateSchedule,
) -> Decimal {
    sum_amounts(hour_pieces(start, end).map(|(piece_start, piece_end)| {
        amount_for(piece_end - piece_start, schedule.rate_for(get_rate_tier(piece_start)))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RateTier;
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

    // ==========================================================================
    // IE-001: Zero-length window earns nothing
    // ==========================================================================
    #[test]
    fn test_ie_001_zero_length() {
        let t = make_datetime("2026-01-13", "10:17:43");
        assert_eq!(earnings_for_interval(t, t, &schedule()), Decimal::ZERO);
        assert!(segment_interval(t, t, &schedule()).is_empty());
    }

    // ==========================================================================
    // IE-002: Reversed window earns nothing
    // ==========================================================================
    #[test]
    fn test_ie_002_reversed_window() {
        let start = make_datetime("2026-01-13", "16:00:00");
        let end = make_datetime("2026-01-13", "08:00:00");
        assert_eq!(earnings_for_interval(start, end, &schedule()), Decimal::ZERO);
        assert!(segment_interval(start, end, &schedule()).is_empty());
    }

    // ==========================================================================
    // IE-003: Tuesday 07:00-19:00 crosses night, day and evening
    // ==========================================================================
    #[test]
    fn test_ie_003_weekday_crosses_three_tiers() {
        let start = make_datetime("2026-01-13", "07:00:00");
        let end = make_datetime("2026-01-13", "19:00:00");

        assert_eq!(earnings_for_interval(start, end, &schedule()), dec("1270"));

        let segments = segment_interval(start, end, &schedule());
        assert_eq!(segments.len(), 12);
        assert_eq!(segments[0].tier, RateTier::Night);
        assert!(segments[1..11].iter().all(|s| s.tier == RateTier::Day));
        assert_eq!(segments[11].tier, RateTier::Evening);
    }

    // ==========================================================================
    // IE-004: Saturday 09:00-17:00 pays the weekend rate throughout
    // ==========================================================================
    #[test]
    fn test_ie_004_saturday_weekend_override() {
        let start = make_datetime("2026-01-17", "09:00:00");
        let end = make_datetime("2026-01-17", "17:00:00");
        assert_eq!(earnings_for_interval(start, end, &schedule()), dec("1600"));
    }

    // ==========================================================================
    // IE-005: Partial hours at both ends
    // ==========================================================================
    #[test]
    fn test_ie_005_partial_hours() {
        // 17:45 to 18:20 on a Tuesday: 15 min day + 20 min evening
        let start = make_datetime("2026-01-13", "17:45:00");
        let end = make_datetime("2026-01-13", "18:20:00");

        let segments = segment_interval(start, end, &schedule());
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end, make_datetime("2026-01-13", "18:00:00"));
        assert_eq!(segments[0].hours, dec("0.25"));
        assert_eq!(segments[0].amount, dec("25"));
        assert_eq!(segments[1].tier, RateTier::Evening);
        assert_eq!(segments[1].amount, dec("40"));

        assert_eq!(earnings_for_interval(start, end, &schedule()), dec("65"));
    }

    // ==========================================================================
    // IE-006: Overnight Friday into Saturday switches to weekend at midnight
    // ==========================================================================
    #[test]
    fn test_ie_006_friday_night_into_saturday() {
        // Friday 22:00 to Saturday 02:00: 1h evening + 1h night + 2h weekend
        let start = make_datetime("2026-01-16", "22:00:00");
        let end = make_datetime("2026-01-17", "02:00:00");
        assert_eq!(
            earnings_for_interval(start, end, &schedule()),
            dec("120") + dec("150") + dec("400")
        );
    }

    // ==========================================================================
    // IE-007: Sunday night into Monday leaves the weekend at midnight
    // ==========================================================================
    #[test]
    fn test_ie_007_sunday_night_into_monday() {
        let start = make_datetime("2026-01-18", "23:00:00");
        let end = make_datetime("2026-01-19", "01:00:00");
        assert_eq!(earnings_for_interval(start, end, &schedule()), dec("350"));
    }

    // ==========================================================================
    // IE-008: Seconds are not lost to rounding
    // ==========================================================================
    #[test]
    fn test_ie_008_single_second() {
        let start = make_datetime("2026-01-13", "10:00:00");
        let end = make_datetime("2026-01-13", "10:00:36");
        // 36 seconds = 0.01 hours
        assert_eq!(earnings_for_interval(start, end, &schedule()), dec("1"));
    }

    // ==========================================================================
    // IE-009: Segments are contiguous and cover the window
    // ==========================================================================
    #[test]
    fn test_ie_009_segments_contiguous() {
        let start = make_datetime("2026-01-13", "05:12:09");
        let end = make_datetime("2026-01-14", "03:48:51");
        let segments = segment_interval(start, end, &schedule());

        assert_eq!(segments.first().unwrap().start, start);
        assert_eq!(segments.last().unwrap().end, end);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        let sum: Decimal = segments.iter().map(|s| s.amount).sum();
        assert_eq!(sum, earnings_for_interval(start, end, &schedule()));
    }

    // ==========================================================================
    // IE-010: Sub-millisecond time is priced and stays additive
    // ==========================================================================
    #[test]
    fn test_ie_010_sub_millisecond_precision() {
        // 3600/h pays exactly 1 per second
        let s = RateSchedule::new(dec("3600"), dec("3600"), dec("3600"), dec("3600")).unwrap();
        let start = make_datetime("2026-01-13", "10:00:00");
        let mid = start + Duration::microseconds(600);
        let end = start + Duration::microseconds(1200);

        let whole = earnings_for_interval(start, end, &s);
        let parts = earnings_for_interval(start, mid, &s) + earnings_for_interval(mid, end, &s);
        assert_eq!(whole, dec("0.0012"));
        assert_eq!(parts, whole);

        let short = earnings_for_interval(start, start + Duration::microseconds(999), &s);
        assert_eq!(short, dec("0.000999"));

        let segments = segment_interval(start, start + Duration::nanoseconds(1), &s);
        assert_eq!(segments[0].amount, dec("0.000000001"));
    }

    // ==========================================================================
    // IE-011: Huge rates never overflow
    // ==========================================================================
    #[test]
    fn test_ie_011_huge_rate_does_not_panic() {
        let huge = RateSchedule {
            day_rate: Decimal::MAX,
            evening_rate: Decimal::MAX,
            night_rate: Decimal::MAX,
            weekend_bonus: Decimal::MAX,
        };
        let start = make_datetime("2026-01-13", "10:00:00");

        assert_eq!(
            earnings_for_interval(start, start + Duration::hours(1), &huge),
            Decimal::MAX
        );
        // Saturates rather than overflowing the sum
        assert_eq!(
            earnings_for_interval(start, start + Duration::hours(3), &huge),
            Decimal::MAX
        );

        let large = RateSchedule {
            day_rate: Decimal::from_scientific("1e23").unwrap(),
            ..huge
        };
        assert_eq!(
            earnings_for_interval(start, start + Duration::hours(1), &large),
            Decimal::from_scientific("1e23").unwrap()
        );
    }

    #[test]
    fn test_next_hour_boundary_at_midnight() {
        assert_eq!(
            next_hour_boundary(make_datetime("2026-01-31", "23:59:59")),
            make_datetime("2026-02-01", "00:00:00")
        );
    }
}
