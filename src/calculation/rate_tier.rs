//! Rate tier detection.
//!
//! This module classifies a local wall-clock instant into a [`RateTier`]
//! and resolves the hourly rate for it from a [`RateSchedule`].

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::models::{RateSchedule, RateTier};

/// The first hour of the day tier.
pub const DAY_START_HOUR: u32 = 8;

/// The first hour of the evening tier.
pub const EVENING_START_HOUR: u32 = 18;

/// The first hour of the night tier.
pub const NIGHT_START_HOUR: u32 = 23;

/// Returns true if the instant falls on a Saturday or Sunday.
pub fn is_weekend(instant: NaiveDateTime) -> bool {
    matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Determines the rate tier for a given instant.
///
/// The hour of day selects day `[8, 18)`, evening `[18, 23)` or night
/// `[23, 24) ∪ [0, 8)`. Any instant on a Saturday or Sunday is
/// [`RateTier::Weekend`] regardless of hour.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::get_rate_tier;
/// use shift_earnings::models::RateTier;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// // 2026-01-13 is a Tuesday
/// assert_eq!(get_rate_tier(at("2026-01-13 07:59:59")), RateTier::Night);
/// assert_eq!(get_rate_tier(at("2026-01-13 08:00:00")), RateTier::Day);
/// assert_eq!(get_rate_tier(at("2026-01-13 18:00:00")), RateTier::Evening);
/// assert_eq!(get_rate_tier(at("2026-01-13 23:00:00")), RateTier::Night);
///
/// // 2026-01-17 is a Saturday
/// assert_eq!(get_rate_tier(at("2026-01-17 12:00:00")), RateTier::Weekend);
/// ```
pub fn get_rate_tier(instant: NaiveDateTime) -> RateTier {
    if is_weekend(instant) {
        return RateTier::Weekend;
    }

    match instant.hour() {
        h if (DAY_START_HOUR..EVENING_START_HOUR).contains(&h) => RateTier::Day,
        h if (EVENING_START_HOUR..NIGHT_START_HOUR).contains(&h) => RateTier::Evening,
        _ => RateTier::Night,
    }
}

/// Returns the hourly rate in force at `instant`.
///
/// Total over all instants; never fails.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::rate_at;
/// use shift_earnings::models::RateSchedule;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::new(
///     Decimal::new(100, 0),
///     Decimal::new(120, 0),
///     Decimal::new(150, 0),
///     Decimal::new(200, 0),
/// ).unwrap();
///
/// // Sunday night still pays the weekend rate
/// let sunday_night = NaiveDateTime::parse_from_str("2026-01-18 23:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(rate_at(sunday_night, &schedule), Decimal::new(200, 0));
/// ```
pub fn rate_at(instant: NaiveDateTime, schedule: &RateSchedule) -> Decimal {
    schedule.rate_for(get_rate_tier(instant))
}
