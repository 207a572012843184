//! Live Shift Earnings Engine
//!
//! This crate computes what a worker has earned so far from a list of shifts
//! and a tiered hourly rate schedule (day, evening, night, weekend), handling
//! partial hours, rate-boundary crossings and unpaid breaks. It also provides
//! file-backed persistence for the rate schedule and the shift list.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
