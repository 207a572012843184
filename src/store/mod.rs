//! Persistence for the shift earnings engine.
//!
//! This module keeps the shift list on disk and provides the [`Tracker`]
//! that combines it with the rate settings for per-tick queries. Files that
//! are missing or cannot be decoded are replaced by empty defaults so the
//! calculation is always given well-typed input.

pub(crate) mod fs_utils;
mod shift_store;
mod tracker;

pub use shift_store::ShiftStore;
pub use tracker::Tracker;
