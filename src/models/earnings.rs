//! Earnings breakdown models.
//!
//! This module contains the structures returned by the breakdown operations:
//! rate-homogeneous [`EarningsSegment`]s, the per-shift [`ShiftEarnings`] and
//! the per-period [`EarningsSummary`].

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AccountingPeriod, RateTier};

/// Rounds an amount to two decimal places for presentation.
///
/// Accumulated totals are never rounded; call this only on the value that
/// is about to be shown.
///
/// # Example
///
/// ```
/// use shift_earnings::models::round_for_display;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("16.6666666666").unwrap();
/// assert_eq!(round_for_display(amount), Decimal::from_str("16.67").unwrap());
/// assert_eq!(round_for_display(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A sub-interval of worked time during which a single rate applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSegment {
    /// The start of the segment.
    pub start: NaiveDateTime,
    /// The end of the segment.
    pub end: NaiveDateTime,
    /// The rate tier in force for the whole segment.
    pub tier: RateTier,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// The length of the segment in hours.
    pub hours: Decimal,
    /// `hours * rate`, unrounded.
    pub amount: Decimal,
}

/// Hours worked, split by rate tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierHours {
    /// Hours at the day rate.
    pub day: Decimal,
    /// Hours at the evening rate.
    pub evening: Decimal,
    /// Hours at the night rate.
    pub night: Decimal,
    /// Hours at the weekend rate.
    pub weekend: Decimal,
}

impl TierHours {
    /// Adds hours to the bucket for `tier`.
    pub fn add(&mut self, tier: RateTier, hours: Decimal) {
        match tier {
            RateTier::Day => self.day += hours,
            RateTier::Evening => self.evening += hours,
            RateTier::Night => self.night += hours,
            RateTier::Weekend => self.weekend += hours,
        }
    }

    /// Returns the hours recorded for `tier`.
    pub fn get(&self, tier: RateTier) -> Decimal {
        match tier {
            RateTier::Day => self.day,
            RateTier::Evening => self.evening,
            RateTier::Night => self.night,
            RateTier::Weekend => self.weekend,
        }
    }

    /// Returns the hours across all tiers.
    pub fn total(&self) -> Decimal {
        self.day + self.evening + self.night + self.weekend
    }
}

/// The earnings of one shift up to an evaluation instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEarnings {
    /// The ID of the shift.
    pub shift_id: Uuid,
    /// The instant work was evaluated up to, or `None` if the shift had not started.
    pub worked_until: Option<NaiveDateTime>,
    /// The rate-homogeneous segments, in chronological order.
    pub segments: Vec<EarningsSegment>,
    /// Total hours across the segments.
    pub worked_hours: Decimal,
    /// Total earned across the segments, unrounded.
    pub amount: Decimal,
}

impl ShiftEarnings {
    /// Builds the shift earnings from its segments, summing hours and amount.
    pub fn from_segments(
        shift_id: Uuid,
        worked_until: Option<NaiveDateTime>,
        segments: Vec<EarningsSegment>,
    ) -> Self {
        let worked_hours: Decimal = segments.iter().map(|s| s.hours).sum();
        let amount = segments
            .iter()
            .fold(Decimal::ZERO, |total, s| total.saturating_add(s.amount));
        Self {
            shift_id,
            worked_until,
            segments,
            worked_hours,
            amount,
        }
    }
}

/// The earnings of every shift in an accounting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// The period the summary covers.
    pub period: AccountingPeriod,
    /// The instant the summary was evaluated at.
    pub evaluated_at: NaiveDateTime,
    /// Per-shift breakdowns, in input order.
    pub shifts: Vec<ShiftEarnings>,
    /// Hours worked per rate tier.
    pub hours_by_tier: TierHours,
    /// Total earned, unrounded.
    pub total: Decimal,
}
