//! Shift model.
//!
//! This module defines the [`Shift`] struct for representing a work shift
//! with an optional break window.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Represents a work shift with timing information and an optional break.
///
/// Instants are local wall-clock times. A break is only considered present
/// when both `break_start` and `break_end` are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The start time of the shift.
    pub start: NaiveDateTime,
    /// The end time of the shift.
    pub end: NaiveDateTime,
    /// The start time of the break, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<NaiveDateTime>,
    /// The end time of the break, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<NaiveDateTime>,
    /// Whether the break is paid (true) or unpaid (false).
    #[serde(default)]
    pub break_paid: bool,
}

impl Shift {
    /// Creates a shift without a break and with a freshly generated ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_earnings::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let shift = Shift::new(
    ///     NaiveDateTime::parse_from_str("2026-01-13 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-01-13 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// );
    /// assert!(shift.break_window().is_none());
    /// assert!(!shift.break_paid);
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::with_id(Uuid::new_v4(), start, end)
    }

    /// Creates a shift without a break using the given ID.
    pub fn with_id(id: Uuid, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id,
            start,
            end,
            break_start: None,
            break_end: None,
            break_paid: false,
        }
    }

    /// Attaches a break window to the shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_earnings::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let shift = Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00"))
    ///     .with_break(at("2026-01-13 12:00:00"), at("2026-01-13 12:30:00"), false);
    ///
    /// assert_eq!(
    ///     shift.break_window(),
    ///     Some((at("2026-01-13 12:00:00"), at("2026-01-13 12:30:00")))
    /// );
    /// assert!(shift.has_unpaid_break());
    /// ```
    pub fn with_break(mut self, start: NaiveDateTime, end: NaiveDateTime, paid: bool) -> Self {
        self.break_start = Some(start);
        self.break_end = Some(end);
        self.break_paid = paid;
        self
    }

    /// Returns the break window when both bounds are present.
    pub fn break_window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.break_start, self.break_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Returns true if the shift has a break that is deducted from worked time.
    pub fn has_unpaid_break(&self) -> bool {
        !self.break_paid && self.break_window().is_some()
    }

    /// Returns true if `instant` lies within `[start, end]`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Returns true if the shift is active at `now` and `now` lies within the
    /// break window (both bounds inclusive).
    pub fn is_on_break_at(&self, now: NaiveDateTime) -> bool {
        self.contains(now)
            && self
                .break_window()
                .is_some_and(|(start, end)| now >= start && now <= end)
    }

    /// Returns the instant work is evaluated up to at `now`, or `None` if the
    /// shift has not started yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_earnings::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let shift = Shift::new(at("2026-01-13 08:00:00"), at("2026-01-13 16:00:00"));
    ///
    /// assert_eq!(shift.worked_until(at("2026-01-13 07:59:59")), None);
    /// assert_eq!(shift.worked_until(at("2026-01-13 10:00:00")), Some(at("2026-01-13 10:00:00")));
    /// assert_eq!(shift.worked_until(at("2026-01-13 20:00:00")), Some(at("2026-01-13 16:00:00")));
    /// ```
    pub fn worked_until(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if now < self.start {
            return None;
        }
        Some(now.min(self.end))
    }

    /// Validates the ordering invariants of the shift.
    ///
    /// The calculation functions accept invalid shifts and treat reversed
    /// ranges as empty; this check is for callers that create or edit shifts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if:
    /// - `end` is before `start`
    /// - only one of the break bounds is set
    /// - the break ends before it starts
    /// - the break lies outside the shift
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidShift {
            shift_id: self.id.to_string(),
            message: message.to_string(),
        };

        if self.end < self.start {
            return Err(invalid("end time before start time"));
        }

        match (self.break_start, self.break_end) {
            (None, None) => Ok(()),
            (Some(_), None) | (None, Some(_)) => {
                Err(invalid("break must have both a start and an end"))
            }
            (Some(break_start), Some(break_end)) => {
                if break_end < break_start {
                    Err(invalid("break end before break start"))
                } else if break_start < self.start || break_end > self.end {
                    Err(invalid("break outside shift"))
                } else {
                    Ok(())
                }
            }
        }
    }
}
