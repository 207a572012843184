//! Persisted shift list.
//!
//! This module provides the [`ShiftStore`] type that keeps the user's shifts
//! in a JSON file and rewrites it after every change.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodFilter, Shift};

use super::fs_utils::{read_existing, write_atomic};

/// Loads and persists the list of shifts.
///
/// Mutations validate the shift, write the new list to disk and only then
/// update the in-memory list, so a failed write leaves the store unchanged.
///
/// # Example
///
/// ```no_run
/// use shift_earnings::store::ShiftStore;
/// use shift_earnings::models::Shift;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let mut store = ShiftStore::open("./data/shifts.json");
/// store.add(Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00")))?;
/// println!("{} shifts", store.shifts().len());
/// # Ok::<(), shift_earnings::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShiftStore {
    path: PathBuf,
    shifts: Vec<Shift>,
}

impl ShiftStore {
    /// Opens the shift file, falling back to an empty list when the file is
    /// missing or cannot be decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let shifts = match Self::load(&path) {
            Ok(shifts) => {
                info!(path = %path.display(), shifts_count = shifts.len(), "Loaded shifts");
                shifts
            }
            Err(EngineError::ConfigNotFound { .. }) => {
                info!(path = %path.display(), "No shifts found, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Unreadable shifts, starting empty");
                Vec::new()
            }
        };

        Self { path, shifts }
    }

    /// Loads the shift list from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file does not exist,
    /// [`EngineError::ConfigReadError`] if it cannot be read, or
    /// [`EngineError::ConfigParseError`] if it is not a valid shift list.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Shift>> {
        let path = path.as_ref();
        let content = read_existing(path)?;

        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the path of the shift file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all shifts in insertion order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Returns the shift with the given ID.
    pub fn get(&self, id: Uuid) -> Option<&Shift> {
        self.shifts.iter().find(|shift| shift.id == id)
    }

    /// Returns the shifts selected by `filter`, ordered by start.
    pub fn shifts_in<F>(&self, filter: &F) -> Vec<&Shift>
    where
        F: PeriodFilter + ?Sized,
    {
        let mut selected: Vec<&Shift> = self
            .shifts
            .iter()
            .filter(|shift| filter.includes(shift))
            .collect();
        selected.sort_by_key(|shift| shift.start);
        selected
    }

    /// Adds a shift and persists the list.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if the shift fails validation or
    /// its ID is already taken, or [`EngineError::ConfigWriteError`] if the
    /// file cannot be written.
    pub fn add(&mut self, shift: Shift) -> EngineResult<()> {
        shift.validate()?;
        if self.get(shift.id).is_some() {
            return Err(EngineError::InvalidShift {
                shift_id: shift.id.to_string(),
                message: "a shift with this id already exists".to_string(),
            });
        }

        let mut shifts = self.shifts.clone();
        shifts.push(shift);
        self.commit(shifts)
    }

    /// Replaces the shift with the same ID and persists the list.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShiftNotFound`] if no shift has that ID,
    /// [`EngineError::InvalidShift`] if the shift fails validation, or
    /// [`EngineError::ConfigWriteError`] if the file cannot be written.
    pub fn update(&mut self, shift: Shift) -> EngineResult<()> {
        shift.validate()?;
        let index = self.index_of(shift.id)?;

        let mut shifts = self.shifts.clone();
        shifts[index] = shift;
        self.commit(shifts)
    }

    /// Removes the shift with the given ID, persists the list and returns the
    /// removed shift.
    pub fn remove(&mut self, id: Uuid) -> EngineResult<Shift> {
        let index = self.index_of(id)?;

        let mut shifts = self.shifts.clone();
        let removed = shifts.remove(index);
        self.commit(shifts)?;
        Ok(removed)
    }

    /// Removes the shifts at the given positions and persists the list.
    ///
    /// Positions refer to [`ShiftStore::shifts`]; duplicates and positions past
    /// the end are ignored.
    pub fn remove_at(&mut self, indices: &[usize]) -> EngineResult<()> {
        let shifts = self
            .shifts
            .iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, shift)| shift.clone())
            .collect();
        self.commit(shifts)
    }

    /// Writes the current list to disk.
    pub fn save(&self) -> EngineResult<()> {
        Self::write(&self.path, &self.shifts)
    }

    fn index_of(&self, id: Uuid) -> EngineResult<usize> {
        self.shifts
            .iter()
            .position(|shift| shift.id == id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: id.to_string(),
            })
    }

    fn commit(&mut self, shifts: Vec<Shift>) -> EngineResult<()> {
        Self::write(&self.path, &shifts)?;
        self.shifts = shifts;
        Ok(())
    }

    fn write(path: &Path, shifts: &[Shift]) -> EngineResult<()> {
        let json =
            serde_json::to_string_pretty(shifts).map_err(|e| EngineError::ConfigWriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        write_atomic(path, &json)?;
        debug!(path = %path.display(), shifts_count = shifts.len(), "Saved shifts");
        Ok(())
    }
}
