//! Persisted rate settings.
//!
//! This module provides the [`SettingsStore`] type that loads the
//! [`RateSchedule`] from a YAML file and writes it back on every change.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::RateSchedule;
use crate::store::fs_utils::{read_existing, write_atomic};

/// Loads and persists the rate schedule.
///
/// The file holds the four rates as YAML:
/// ```text
/// day_rate: '185.00'
/// evening_rate: '210.00'
/// night_rate: '240.00'
/// weekend_bonus: '300.00'
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_earnings::config::SettingsStore;
/// use shift_earnings::models::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let mut settings = SettingsStore::open("./data/settings.yaml");
/// let schedule = RateSchedule::new(
///     Decimal::new(185, 0),
///     Decimal::new(210, 0),
///     Decimal::new(240, 0),
///     Decimal::new(300, 0),
/// )?;
/// settings.update(schedule)?;
/// # Ok::<(), shift_earnings::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    schedule: RateSchedule,
}

impl SettingsStore {
    /// Opens the settings file, falling back to the all-zero schedule when
    /// the file is missing or cannot be decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let schedule = match Self::load(&path) {
            Ok(schedule) => {
                info!(path = %path.display(), "Loaded rate settings");
                schedule
            }
            Err(EngineError::ConfigNotFound { .. }) => {
                info!(path = %path.display(), "No rate settings found, using defaults");
                RateSchedule::default()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Unreadable rate settings, using defaults");
                RateSchedule::default()
            }
        };

        Self { path, schedule }
    }

    /// Loads the rate schedule from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file does not exist ([`EngineError::ConfigNotFound`])
    /// - the file cannot be read ([`EngineError::ConfigReadError`])
    /// - the file is not a valid schedule ([`EngineError::ConfigParseError`])
    /// - a rate is negative ([`EngineError::InvalidRate`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<RateSchedule> {
        let path = path.as_ref();
        let content = read_existing(path)?;

        let schedule: RateSchedule =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        schedule.validate()?;
        Ok(schedule)
    }

    /// Returns the path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Replaces the rate schedule and persists it.
    ///
    /// The in-memory schedule only changes once the file has been written.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] for a negative rate, or
    /// [`EngineError::ConfigWriteError`] if the file cannot be written.
    pub fn update(&mut self, schedule: RateSchedule) -> EngineResult<()> {
        schedule.validate()?;
        Self::write(&self.path, &schedule)?;
        self.schedule = schedule;
        Ok(())
    }

    /// Writes the current schedule to disk.
    pub fn save(&self) -> EngineResult<()> {
        Self::write(&self.path, &self.schedule)
    }

    fn write(path: &Path, schedule: &RateSchedule) -> EngineResult<()> {
        let yaml = serde_yaml::to_string(schedule).map_err(|e| EngineError::ConfigWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        write_atomic(path, &yaml)?;
        debug!(path = %path.display(), "Saved rate settings");
        Ok(())
    }
}
