//! Pool holiday model.
//!
//! Pool holidays are user-selected opt-in holidays. Unlike the fixed,
//! recurring, and configured sources (which live in the calendar
//! configuration, see [`crate::config`]), pool holidays arrive as request
//! data per user, and their date strings carry no format guarantee.

use serde::{Deserialize, Serialize};

/// A user-specific opt-in holiday.
///
/// The `holiday_date` string is entered through an independent UI path and
/// may be a full `YYYY-MM-DD`, a year-agnostic `-MM-DD`, or free text with
/// separators; the date matcher resolves it leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolHoliday {
    /// The user who opted into this holiday.
    pub user_id: String,
    /// The holiday date string, format not guaranteed.
    pub holiday_date: String,
}
