//! The daily status classifier.
//!
//! The core decision procedure: given one user-day's holiday flags, approved
//! leave, and check-in/check-out events, emit one status code plus the
//! worked-duration and overtime numerics. Precedence, first match wins:
//!
//! 1. Company holiday (fixed/pool/configured): `H/P` with activity, else `H`.
//! 2. Recurring holiday: `H/P` with activity, else `F/H`.
//! 3. Activity: `W/P` on Sundays, `W/H` on a work-from-home location,
//!    `P` at six or more worked hours, `0.5P` at three or more, `P` below
//!    that. Overtime accrues past eight hours.
//! 4. Approved leave (event-free days only): status from the leave type.
//! 5. Sunday with nothing else: tentative `W/O`, subject to the weekend
//!    escalation pass.
//! 6. Otherwise `A`.
//!
//! Activity overrides approved leave: a day with any event classifies through
//! the activity branch even when a leave covers it.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{
    AttendanceEvent, DailyStatusRecord, EventKind, LeaveType, StatusCode,
};

use super::holiday_resolver::HolidayCheck;

/// Worked hours at or above which a day is a full `P`.
pub const FULL_DAY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Worked hours at or above which a day is at least `0.5P`.
pub const HALF_DAY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Worked hours beyond which overtime accrues.
pub const OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Case-insensitive location marker that classifies an activity day as `W/H`.
pub const WORK_FROM_HOME_MARKER: &str = "work from home";

/// Everything the classifier needs for one user-day.
///
/// `events` must contain only this user's events for this date; the report
/// pipeline does the grouping.
#[derive(Debug, Clone)]
pub struct DayInput<'a> {
    /// The user being classified.
    pub user_id: &'a str,
    /// The calendar day.
    pub date: NaiveDate,
    /// This user's events on this day.
    pub events: &'a [AttendanceEvent],
    /// Approved leave covering this day, if any.
    pub leave: Option<LeaveType>,
    /// Holiday resolution for this day.
    pub holiday: HolidayCheck,
}

/// Classifies one user-day into a [`DailyStatusRecord`].
///
/// Pure and deterministic: identical inputs yield identical records. Missing
/// check-in or check-out never fails classification; the duration is simply
/// zero.
pub fn classify_day(input: &DayInput<'_>) -> DailyStatusRecord {
    let is_sunday = input.date.weekday() == Weekday::Sun;
    let has_activity = !input.events.is_empty();

    let first_check_in = input
        .events
        .iter()
        .filter(|e| e.kind == EventKind::CheckIn)
        .min_by_key(|e| e.timestamp);
    let last_check_out = input
        .events
        .iter()
        .filter(|e| e.kind == EventKind::CheckOut)
        .max_by_key(|e| e.timestamp);

    let worked_minutes = match (first_check_in, last_check_out) {
        // clamp inverted pairs rather than reporting negative time
        (Some(check_in), Some(check_out)) => {
            (check_out.timestamp - check_in.timestamp).num_minutes().max(0)
        }
        _ => 0,
    };

    let mut ot_minutes = Decimal::ZERO;
    let mut loss_of_pay = false;

    let status = if input.holiday.is_company_holiday {
        if has_activity {
            StatusCode::HolidayPresent
        } else {
            StatusCode::Holiday
        }
    } else if input.holiday.is_recurring_holiday {
        if has_activity {
            StatusCode::HolidayPresent
        } else {
            StatusCode::FloatingHoliday
        }
    } else if has_activity {
        let worked_hours = Decimal::from(worked_minutes) / Decimal::from(60);
        if worked_hours > OVERTIME_THRESHOLD_HOURS {
            // round the excess to one decimal hour before converting to minutes
            ot_minutes =
                (worked_hours - OVERTIME_THRESHOLD_HOURS).round_dp(1) * Decimal::from(60);
        }

        if is_sunday {
            StatusCode::WeekendPresent
        } else if is_work_from_home(first_check_in, last_check_out) {
            StatusCode::WorkFromHome
        } else if worked_hours >= FULL_DAY_THRESHOLD_HOURS {
            StatusCode::Present
        } else if worked_hours >= HALF_DAY_THRESHOLD_HOURS {
            StatusCode::HalfDay
        } else {
            // sub-half-day activity still counts as present
            StatusCode::Present
        }
    } else if let Some(leave) = input.leave {
        match leave {
            LeaveType::Sick => StatusCode::SickLeave,
            LeaveType::CompOff => StatusCode::CompOff,
            LeaveType::Floating => StatusCode::FloatingHoliday,
            LeaveType::LossOfPay => {
                loss_of_pay = true;
                StatusCode::Absent
            }
            LeaveType::Earned => StatusCode::EarnedLeave,
        }
    } else if is_sunday {
        StatusCode::WeekOff
    } else {
        StatusCode::Absent
    };

    DailyStatusRecord {
        user_id: input.user_id.to_string(),
        date: input.date,
        status,
        check_in: first_check_in.map(|e| e.timestamp),
        check_out: last_check_out.map(|e| e.timestamp),
        worked_minutes,
        ot_minutes,
        loss_of_pay,
    }
}

/// True if the first check-in or last check-out carries the work-from-home
/// location marker, case-insensitively.
fn is_work_from_home(
    check_in: Option<&AttendanceEvent>,
    check_out: Option<&AttendanceEvent>,
) -> bool {
    [check_in, check_out]
        .iter()
        .flatten()
        .filter_map(|e| e.location_name.as_deref())
        .any(|name| name.to_lowercase().contains(WORK_FROM_HOME_MARKER))
}
