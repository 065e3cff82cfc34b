//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the `/report`
//! endpoint. The caller fetches events, leaves, and pool holidays itself
//! (concurrently if it likes) and posts the materialized collections here.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceEvent, EventKind, LeaveInterval, LeaveStatus, PoolHoliday, StaffUser,
};

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The users to classify. Each user's day sequence is processed
    /// independently.
    pub users: Vec<UserRequest>,
    /// The reporting range.
    pub range: RangeRequest,
    /// Raw attendance events for all requested users.
    #[serde(default)]
    pub events: Vec<EventRequest>,
    /// Leave intervals for all requested users.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Pool holidays for all requested users.
    #[serde(default)]
    pub pool_holidays: Vec<PoolHolidayRequest>,
}

/// User information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequest {
    /// Unique identifier for the user.
    pub id: String,
    /// The user's role name; decides the office/field category.
    pub role: String,
}

/// Reporting range in a report request, inclusive at both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeRequest {
    /// The start date (inclusive).
    pub start: NaiveDate,
    /// The end date (inclusive).
    pub end: NaiveDate,
}

/// Attendance event in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// The user the event belongs to.
    pub user_id: String,
    /// The instant the event was recorded.
    pub timestamp: NaiveDateTime,
    /// Whether this is a check-in or a check-out.
    pub kind: EventKind,
    /// Optional location name captured with the event.
    #[serde(default)]
    pub location_name: Option<String>,
}

/// Leave interval in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The user the leave belongs to.
    pub user_id: String,
    /// First covered day (inclusive).
    pub start_date: NaiveDate,
    /// Last covered day (inclusive).
    pub end_date: NaiveDate,
    /// The raw leave-type string.
    pub leave_type: String,
    /// Approval state.
    pub status: LeaveStatus,
}

/// Pool holiday in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolHolidayRequest {
    /// The user who opted into this holiday.
    pub user_id: String,
    /// The holiday date string, format not guaranteed.
    pub holiday_date: String,
}

impl From<UserRequest> for StaffUser {
    fn from(req: UserRequest) -> Self {
        StaffUser {
            id: req.id,
            role: req.role,
        }
    }
}

impl From<EventRequest> for AttendanceEvent {
    fn from(req: EventRequest) -> Self {
        AttendanceEvent {
            user_id: req.user_id,
            timestamp: req.timestamp,
            kind: req.kind,
            location_name: req.location_name,
        }
    }
}

impl From<LeaveRequest> for LeaveInterval {
    fn from(req: LeaveRequest) -> Self {
        LeaveInterval {
            user_id: req.user_id,
            start_date: req.start_date,
            end_date: req.end_date,
            leave_type: req.leave_type,
            status: req.status,
        }
    }
}

impl From<PoolHolidayRequest> for PoolHoliday {
    fn from(req: PoolHolidayRequest) -> Self {
        PoolHoliday {
            user_id: req.user_id,
            holiday_date: req.holiday_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_deserializes() {
        let json = r#"{
            "users": [{"id": "emp_001", "role": "hr"}],
            "range": {"start": "2026-01-01", "end": "2026-01-31"}
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.users.len(), 1);
        assert!(request.events.is_empty());
        assert!(request.leaves.is_empty());
        assert!(request.pool_holidays.is_empty());
    }

    #[test]
    fn test_full_request_deserializes() {
        let json = r#"{
            "users": [{"id": "emp_001", "role": "supervisor"}],
            "range": {"start": "2026-01-01", "end": "2026-01-31"},
            "events": [{
                "user_id": "emp_001",
                "timestamp": "2026-01-12T09:00:00",
                "kind": "check-in",
                "location_name": "Head Office"
            }],
            "leaves": [{
                "user_id": "emp_001",
                "start_date": "2026-01-20",
                "end_date": "2026-01-21",
                "leave_type": "Sick",
                "status": "approved"
            }],
            "pool_holidays": [{
                "user_id": "emp_001",
                "holiday_date": "-03-17"
            }]
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        let event: AttendanceEvent = request.events[0].clone().into();
        assert_eq!(event.kind, EventKind::CheckIn);
        let leave: LeaveInterval = request.leaves[0].clone().into();
        assert_eq!(leave.status, LeaveStatus::Approved);
        let user: StaffUser = request.users[0].clone().into();
        assert_eq!(user.id, "emp_001");
    }

    #[test]
    fn test_missing_users_field_fails() {
        let json = r#"{"range": {"start": "2026-01-01", "end": "2026-01-31"}}"#;
        let result: Result<ReportRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
