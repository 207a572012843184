//! File helpers shared by the persistent stores.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// Writes `contents` to `path` through a `.tmp` sibling and a rename, so a
/// reader never observes a half-written file. Missing parent directories are
/// created.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> EngineResult<()> {
    let write_error = |e: std::io::Error| EngineError::ConfigWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents).map_err(write_error)?;
    fs::rename(&tmp_path, path).map_err(write_error)
}

/// Reads `path` to a string.
///
/// A missing file is [`EngineError::ConfigNotFound`], content that is not
/// UTF-8 is [`EngineError::ConfigParseError`], and any other failure is
/// [`EngineError::ConfigReadError`].
pub(crate) fn read_existing(path: &Path) -> EngineResult<String> {
    fs::read_to_string(path).map_err(|e| {
        let path = path.display().to_string();
        match e.kind() {
            ErrorKind::NotFound => EngineError::ConfigNotFound { path },
            ErrorKind::InvalidData => EngineError::ConfigParseError {
                path,
                message: e.to_string(),
            },
            _ => EngineError::ConfigReadError {
                path,
                message: e.to_string(),
            },
        }
    })
}
