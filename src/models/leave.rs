//! Leave interval model and the leave-type vocabulary.
//!
//! Leave intervals arrive from an external data service. Only approved
//! intervals participate in classification; the raw leave-type string is
//! parsed into a closed [`LeaveType`] so that typos and vendor-specific
//! spellings cannot leak into the status rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a leave interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// The leave was approved and participates in classification.
    Approved,
    /// The leave is awaiting approval.
    Pending,
    /// The leave was rejected.
    Rejected,
    /// The leave was cancelled after submission.
    Cancelled,
}

/// The closed leave-type vocabulary.
///
/// Raw leave-type strings are entered through several independent UI paths
/// with inconsistent spellings; [`LeaveType::parse`] maps them here.
/// Unknown vocabulary defaults to [`LeaveType::Earned`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Sick leave.
    Sick,
    /// Earned (privilege) leave. The default for unknown type strings.
    Earned,
    /// Compensatory off.
    CompOff,
    /// Floating holiday leave.
    Floating,
    /// Loss of pay. Classified as absent and excluded from payable days.
    LossOfPay,
}

impl LeaveType {
    /// Parses a raw leave-type string, case- and whitespace-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::LeaveType;
    ///
    /// assert_eq!(LeaveType::parse("Sick"), LeaveType::Sick);
    /// assert_eq!(LeaveType::parse(" Comp Off "), LeaveType::CompOff);
    /// assert_eq!(LeaveType::parse("Floating Holiday"), LeaveType::Floating);
    /// assert_eq!(LeaveType::parse("LOP"), LeaveType::LossOfPay);
    /// assert_eq!(LeaveType::parse("paternity"), LeaveType::Earned);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sick" | "sick leave" | "s/l" => LeaveType::Sick,
            "comp off" | "comp-off" | "compoff" | "comp_off" | "c/o" => LeaveType::CompOff,
            "floating" | "floating holiday" | "f/h" => LeaveType::Floating,
            "loss of pay" | "lop" => LeaveType::LossOfPay,
            _ => LeaveType::Earned,
        }
    }
}

/// An approved-leave interval for one user.
///
/// Matching uses inclusive day-level interval containment: a leave from
/// `start_date` to `end_date` covers both endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// The user the leave belongs to.
    pub user_id: String,
    /// First covered day (inclusive).
    pub start_date: NaiveDate,
    /// Last covered day (inclusive).
    pub end_date: NaiveDate,
    /// The raw leave-type string as entered upstream.
    pub leave_type: String,
    /// Approval state; only [`LeaveStatus::Approved`] intervals participate.
    pub status: LeaveStatus,
}

impl LeaveInterval {
    /// Returns true if this interval covers the given date (inclusive).
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
