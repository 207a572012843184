//! Tracker state.
//!
//! This module ties the persisted settings and shifts together and exposes
//! the pull-based queries a host runs on its own timer.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::{LiveStatus, earnings_summary, live_status, total_earnings};
use crate::config::{DataPaths, SettingsStore};
use crate::error::EngineResult;
use crate::models::{AccountingPeriod, EarningsSummary, RateSchedule, Shift};

use super::ShiftStore;

/// The application's persisted state.
///
/// Owns the rate settings and the shift list. Every query passes borrowed
/// snapshots of both into the pure calculation functions.
///
/// # Example
///
/// ```no_run
/// use shift_earnings::calculation::local_now;
/// use shift_earnings::config::DataPaths;
/// use shift_earnings::models::round_for_display;
/// use shift_earnings::store::Tracker;
///
/// let tracker = Tracker::open(&DataPaths::platform_default());
///
/// // Called by the host once per tick
/// let now = local_now();
/// let status = tracker.status(now);
/// println!(
///     "This month: {} ({}/h{})",
///     round_for_display(tracker.month_earnings(now)),
///     status.hourly_rate,
///     if status.on_break { " - Break" } else { "" }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tracker {
    settings: SettingsStore,
    shifts: ShiftStore,
}

impl Tracker {
    /// Opens the settings and shift files under `paths`.
    pub fn open(paths: &DataPaths) -> Self {
        Self::new(
            SettingsStore::open(paths.settings_file()),
            ShiftStore::open(paths.shifts_file()),
        )
    }

    /// Creates a tracker from already opened stores.
    pub fn new(settings: SettingsStore, shifts: ShiftStore) -> Self {
        Self { settings, shifts }
    }

    /// Returns the current rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        self.settings.schedule()
    }

    /// Returns all shifts.
    pub fn shifts(&self) -> &[Shift] {
        self.shifts.shifts()
    }

    /// Returns the shift store.
    pub fn shift_store(&self) -> &ShiftStore {
        &self.shifts
    }

    /// Earnings so far for shifts starting in the calendar month of `now`.
    pub fn month_earnings(&self, now: NaiveDateTime) -> Decimal {
        total_earnings(
            self.shifts(),
            now,
            self.schedule(),
            &AccountingPeriod::month_of(now),
        )
    }

    /// The live rate and break state at `now`.
    pub fn status(&self, now: NaiveDateTime) -> LiveStatus {
        live_status(self.shifts(), now, self.schedule())
    }

    /// The per-shift breakdown of `period` at `now`.
    pub fn summary(&self, now: NaiveDateTime, period: AccountingPeriod) -> EarningsSummary {
        earnings_summary(self.shifts(), now, self.schedule(), period)
    }

    /// Replaces and persists the rate schedule.
    pub fn update_rates(&mut self, schedule: RateSchedule) -> EngineResult<()> {
        self.settings.update(schedule)
    }

    /// Adds and persists a shift.
    pub fn add_shift(&mut self, shift: Shift) -> EngineResult<()> {
        self.shifts.add(shift)
    }

    /// Replaces and persists the shift with the same ID.
    pub fn update_shift(&mut self, shift: Shift) -> EngineResult<()> {
        self.shifts.update(shift)
    }

    /// Removes and persists the shift with the given ID.
    pub fn remove_shift(&mut self, id: Uuid) -> EngineResult<Shift> {
        self.shifts.remove(id)
    }
}
