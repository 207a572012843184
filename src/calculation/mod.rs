//! Calculation logic for the shift earnings engine.
//!
//! This module contains all the calculation functions: rate tier detection,
//! hour-by-hour interval segmentation, per-shift earnings with break
//! deduction, period totals, and the live status shown on every tick.
//!
//! Every function here is pure. The current time is always passed in as
//! `now`; see [`local_now`] for hosts that need it.

mod interval_earnings;
mod live_status;
mod rate_tier;
mod shift_earnings;
mod totals;

pub use interval_earnings::{earnings_for_interval, next_hour_boundary, segment_interval};
pub use live_status::{LiveStatus, active_shift, is_on_break, live_status, local_now};
pub use rate_tier::{
    DAY_START_HOUR, EVENING_START_HOUR, NIGHT_START_HOUR, get_rate_tier, is_weekend, rate_at,
};
pub use shift_earnings::{earnings_for_shift, shift_earnings, worked_hours, worked_intervals};
pub use totals::{earnings_summary, scheduled_earnings, total_earnings};
