//! Rate schedule model.
//!
//! This module contains the [`RateSchedule`] type holding the four hourly
//! rates and the [`RateTier`] enum naming which of them applies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The rate tier that applies to an instant.
///
/// # Example
///
/// ```
/// use shift_earnings::models::RateTier;
///
/// assert_eq!(RateTier::Evening.to_string(), "Evening");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// Weekdays 08:00 to 18:00.
    Day,
    /// Weekdays 18:00 to 23:00.
    Evening,
    /// Weekdays 23:00 to 08:00.
    Night,
    /// Any hour on Saturday or Sunday.
    Weekend,
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateTier::Day => write!(f, "Day"),
            RateTier::Evening => write!(f, "Evening"),
            RateTier::Night => write!(f, "Night"),
            RateTier::Weekend => write!(f, "Weekend"),
        }
    }
}

/// The hourly rates for each tier.
///
/// All four rates are always defined. The default schedule has every rate
/// set to zero, which is what an unconfigured installation starts from.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{RateSchedule, RateTier};
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::new(
///     Decimal::new(100, 0),
///     Decimal::new(120, 0),
///     Decimal::new(150, 0),
///     Decimal::new(200, 0),
/// ).unwrap();
///
/// assert_eq!(schedule.rate_for(RateTier::Night), Decimal::new(150, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Hourly rate for the day tier.
    pub day_rate: Decimal,
    /// Hourly rate for the evening tier.
    pub evening_rate: Decimal,
    /// Hourly rate for the night tier.
    pub night_rate: Decimal,
    /// Hourly rate for any hour on a weekend.
    pub weekend_bonus: Decimal,
}

impl RateSchedule {
    /// Creates a validated rate schedule.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] if any rate is negative.
    pub fn new(
        day_rate: Decimal,
        evening_rate: Decimal,
        night_rate: Decimal,
        weekend_bonus: Decimal,
    ) -> EngineResult<Self> {
        let schedule = Self {
            day_rate,
            evening_rate,
            night_rate,
            weekend_bonus,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Returns the hourly rate for a tier.
    pub fn rate_for(&self, tier: RateTier) -> Decimal {
        match tier {
            RateTier::Day => self.day_rate,
            RateTier::Evening => self.evening_rate,
            RateTier::Night => self.night_rate,
            RateTier::Weekend => self.weekend_bonus,
        }
    }

    /// Checks that every rate is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] naming the first negative rate.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("day_rate", self.day_rate),
            ("evening_rate", self.evening_rate),
            ("night_rate", self.night_rate),
            ("weekend_bonus", self.weekend_bonus),
        ];

        match fields.iter().find(|(_, rate)| *rate < Decimal::ZERO) {
            Some((field, rate)) => Err(EngineError::InvalidRate {
                field: field.to_string(),
                message: format!("must not be negative, got {}", rate),
            }),
            None => Ok(()),
        }
    }
}
