//! Leave resolution against approved-leave intervals.

use chrono::NaiveDate;

use crate::models::{LeaveInterval, LeaveStatus, LeaveType};

/// Finds an approved leave covering the date for the user and returns its
/// parsed leave type.
///
/// Only `Approved` intervals participate; matching is inclusive day-level
/// containment. Empty input is simply "no leave", never an error. When
/// several approved intervals overlap the same day, the first in input
/// order wins.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::resolve_leave;
/// use attendance_engine::models::{LeaveInterval, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let leaves = vec![LeaveInterval {
///     user_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     leave_type: "Sick".to_string(),
///     status: LeaveStatus::Approved,
/// }];
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(resolve_leave(date, "emp_001", &leaves), Some(LeaveType::Sick));
/// assert_eq!(resolve_leave(date, "emp_002", &leaves), None);
/// ```
pub fn resolve_leave(
    date: NaiveDate,
    user_id: &str,
    leaves: &[LeaveInterval],
) -> Option<LeaveType> {
    leaves
        .iter()
        .find(|leave| {
            leave.status == LeaveStatus::Approved
                && leave.user_id == user_id
                && leave.covers(date)
        })
        .map(|leave| LeaveType::parse(&leave.leave_type))
}
