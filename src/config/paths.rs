//! Data directory layout.

use std::path::{Path, PathBuf};

/// The directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "shift-earnings";

const SETTINGS_FILE_NAME: &str = "settings.yaml";
const SHIFTS_FILE_NAME: &str = "shifts.json";

/// Locates the files the application persists.
///
/// # Example
///
/// ```
/// use shift_earnings::config::DataPaths;
///
/// let paths = DataPaths::new("/tmp/earnings");
/// assert!(paths.settings_file().ends_with("settings.yaml"));
/// assert!(paths.shifts_file().ends_with("shifts.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Uses `root` as the data directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Uses the platform data directory, or the current directory if the
    /// platform has none.
    pub fn platform_default() -> Self {
        let root = dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { root }
    }

    /// Returns the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the rate settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    /// Returns the path of the shift list file.
    pub fn shifts_file(&self) -> PathBuf {
        self.root.join(SHIFTS_FILE_NAME)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::platform_default()
    }
}
