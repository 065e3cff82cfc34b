//! Daily status codes and the per-day status record.
//!
//! Status codes form a closed enum internally and serialize to the literal
//! short tokens downstream report layouts match on (`"P"`, `"H/P"`, `"W/O"`
//! and so on). Keeping the enum closed stops typo'd strings from slipping
//! through filtering logic.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The authoritative status for one user on one calendar day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::StatusCode;
///
/// assert_eq!(StatusCode::HalfDay.as_token(), "0.5P");
/// assert_eq!(serde_json::to_string(&StatusCode::HolidayPresent).unwrap(), "\"H/P\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// Present, full day worked.
    #[serde(rename = "P")]
    Present,
    /// Half-day present.
    #[serde(rename = "0.5P")]
    HalfDay,
    /// Absent.
    #[serde(rename = "A")]
    Absent,
    /// Company holiday, no activity.
    #[serde(rename = "H")]
    Holiday,
    /// Holiday with activity ("holiday present").
    #[serde(rename = "H/P")]
    HolidayPresent,
    /// Floating holiday: a recurring-holiday absence, or floating-type leave.
    #[serde(rename = "F/H")]
    FloatingHoliday,
    /// Week off (non-working Sunday, unescalated).
    #[serde(rename = "W/O")]
    WeekOff,
    /// Week-off day with activity ("weekend present").
    #[serde(rename = "W/P")]
    WeekendPresent,
    /// Work from home.
    #[serde(rename = "W/H")]
    WorkFromHome,
    /// Sick leave.
    #[serde(rename = "S/L")]
    SickLeave,
    /// Earned leave.
    #[serde(rename = "E/L")]
    EarnedLeave,
    /// Compensatory off.
    #[serde(rename = "C/O")]
    CompOff,
}

impl StatusCode {
    /// Returns the literal short token emitted at the report boundary.
    pub fn as_token(&self) -> &'static str {
        match self {
            StatusCode::Present => "P",
            StatusCode::HalfDay => "0.5P",
            StatusCode::Absent => "A",
            StatusCode::Holiday => "H",
            StatusCode::HolidayPresent => "H/P",
            StatusCode::FloatingHoliday => "F/H",
            StatusCode::WeekOff => "W/O",
            StatusCode::WeekendPresent => "W/P",
            StatusCode::WorkFromHome => "W/H",
            StatusCode::SickLeave => "S/L",
            StatusCode::EarnedLeave => "E/L",
            StatusCode::CompOff => "C/O",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// One finalized status record for a user-day.
///
/// Created by the daily status classifier, mutated at most once by the
/// weekend escalation pass (the `W/O → A` rewrite only), never afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatusRecord {
    /// The user this record belongs to.
    pub user_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The authoritative status for the day.
    pub status: StatusCode,
    /// First check-in of the day, if any.
    pub check_in: Option<NaiveDateTime>,
    /// Last check-out of the day, if any.
    pub check_out: Option<NaiveDateTime>,
    /// Minutes between first check-in and last check-out; 0 if either is missing.
    pub worked_minutes: i64,
    /// Overtime minutes beyond the 8-hour workday, 0 when none.
    pub ot_minutes: Decimal,
    /// True when an absent day is the loss-of-pay sub-classification.
    pub loss_of_pay: bool,
}
