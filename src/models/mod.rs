//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod event;
mod holiday;
mod leave;
mod report;
mod status;
mod user;

pub use event::{AttendanceEvent, EventKind};
pub use holiday::PoolHoliday;
pub use leave::{LeaveInterval, LeaveStatus, LeaveType};
pub use report::{MonthlyAggregate, ReportRange, StatusCounters};
pub use status::{DailyStatusRecord, StatusCode};
pub use user::{StaffCategory, StaffUser};

pub(crate) use user::user_id_matches;
