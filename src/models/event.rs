//! Attendance event model.
//!
//! This module defines the raw check-in/check-out events the classifier
//! consumes. Events are immutable and externally sourced; the engine never
//! creates or mutates them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The kind of an attendance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// The employee checked in.
    CheckIn,
    /// The employee checked out.
    CheckOut,
}

/// A single raw check-in or check-out event.
///
/// Multiple events per user-day are possible (multiple check-in/out pairs);
/// only the first check-in and the last check-out of a day feed the worked
/// duration.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceEvent, EventKind};
/// use chrono::NaiveDateTime;
///
/// let event = AttendanceEvent {
///     user_id: "emp_001".to_string(),
///     timestamp: NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     kind: EventKind::CheckIn,
///     location_name: Some("Head Office".to_string()),
/// };
/// assert_eq!(event.kind, EventKind::CheckIn);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// The user this event belongs to.
    pub user_id: String,
    /// The instant the event was recorded.
    pub timestamp: NaiveDateTime,
    /// Whether this is a check-in or a check-out.
    pub kind: EventKind,
    /// Optional location name captured with the event.
    #[serde(default)]
    pub location_name: Option<String>,
}

impl AttendanceEvent {
    /// Returns the calendar date the event falls on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
