//! Core data models for the shift earnings engine.
//!
//! This module contains all the domain models used throughout the engine.

mod earnings;
mod interval;
mod period;
mod rate_schedule;
mod shift;

pub use earnings::{EarningsSegment, EarningsSummary, ShiftEarnings, TierHours, round_for_display};
pub use interval::WorkInterval;
pub use period::{AccountingPeriod, PeriodFilter};
pub use rate_schedule::{RateSchedule, RateTier};
pub use shift::Shift;
