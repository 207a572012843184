//! Configuration loading and management for the shift earnings engine.
//!
//! This module locates the application's data directory and persists the
//! rate schedule as YAML.
//!
//! # Example
//!
//! ```no_run
//! use shift_earnings::config::{DataPaths, SettingsStore};
//!
//! let paths = DataPaths::platform_default();
//! let settings = SettingsStore::open(paths.settings_file());
//! println!("Day rate: {}", settings.schedule().day_rate);
//! ```

mod paths;
mod settings;

pub use paths::{APP_DIR_NAME, DataPaths};
pub use settings::SettingsStore;
