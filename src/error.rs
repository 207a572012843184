//! Error types for the shift earnings engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only the persistence collaborators and caller-side validation produce
//! errors; the earnings calculation itself is total and never fails.

use thiserror::Error;

/// The main error type for the shift earnings engine.
///
/// # Example
///
/// ```
/// use shift_earnings::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An existing file could not be read.
    #[error("Failed to read '{path}': {message}")]
    ConfigReadError {
        /// The path that could not be read.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// Persisted data could not be written.
    #[error("Failed to write '{path}': {message}")]
    ConfigWriteError {
        /// The path that could not be written.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A rate in the schedule was invalid.
    #[error("Invalid rate '{field}': {message}")]
    InvalidRate {
        /// The rate field that was invalid.
        field: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// No shift with the given ID exists in the store.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The ID that was looked up.
        shift_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
