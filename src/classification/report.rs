//! The per-user report pipeline.
//!
//! Strings the resolvers, the daily classifier, the weekend escalation pass,
//! and the monthly aggregator together for one user over one reporting
//! range. The classification range is extended backwards by a lookback
//! buffer so the escalation pass has history at the start of a month; buffer
//! days are discarded after escalation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::{
    AttendanceEvent, DailyStatusRecord, LeaveInterval, MonthlyAggregate, PoolHoliday,
    ReportRange, StaffUser,
};

use super::daily_status::{DayInput, classify_day};
use super::holiday_resolver::resolve_holiday;
use super::leave_resolver::resolve_leave;
use super::monthly_aggregate::aggregate;
use super::weekend_escalation::escalate_weekends;

/// Days of history classified before the reporting window so the first
/// Sunday of the window has a full escalation lookback.
pub const ESCALATION_BUFFER_DAYS: u64 = 7;

/// Builds the finalized, trimmed daily status rows for one user.
///
/// Used for log/basic reports: one row per day of the requested range, in
/// chronological order, with escalation already applied.
pub fn build_daily_log(
    user: &StaffUser,
    range: &ReportRange,
    calendar: &HolidayCalendar,
    events: &[AttendanceEvent],
    leaves: &[LeaveInterval],
    pool: &[PoolHoliday],
) -> EngineResult<Vec<DailyStatusRecord>> {
    let buffered = range.with_lookback_buffer(ESCALATION_BUFFER_DAYS);
    let events_by_day = group_events(&user.id, events);
    let category = user.category();

    let mut records = Vec::with_capacity(buffered.num_days() as usize);
    for date in buffered.days() {
        let day_events = events_by_day
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let holiday = resolve_holiday(date, category, calendar, pool, &user.id);
        let leave = resolve_leave(date, &user.id, leaves);
        records.push(classify_day(&DayInput {
            user_id: &user.id,
            date,
            events: day_events,
            leave,
            holiday,
        }));
    }

    let escalated = escalate_weekends(&records)?;

    // the buffer was only for lookback
    Ok(escalated
        .into_iter()
        .filter(|record| range.contains(record.date))
        .collect())
}

/// Builds the monthly aggregate for one user: the daily log rolled into
/// counters and the payable-day total.
pub fn build_user_report(
    user: &StaffUser,
    range: &ReportRange,
    calendar: &HolidayCalendar,
    events: &[AttendanceEvent],
    leaves: &[LeaveInterval],
    pool: &[PoolHoliday],
) -> EngineResult<MonthlyAggregate> {
    let daily = build_daily_log(user, range, calendar, events, leaves, pool)?;
    Ok(aggregate(&user.id, daily))
}

/// Groups one user's events by calendar day, chronological within the day.
fn group_events(
    user_id: &str,
    events: &[AttendanceEvent],
) -> BTreeMap<NaiveDate, Vec<AttendanceEvent>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<AttendanceEvent>> = BTreeMap::new();
    for event in events.iter().filter(|e| e.user_id == user_id) {
        by_day.entry(event.date()).or_default().push(event.clone());
    }
    for day_events in by_day.values_mut() {
        day_events.sort_by_key(|e| e.timestamp);
    }
    by_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfiguredHolidays, HolidayCalendar};
    use crate::models::{EventKind, LeaveStatus, StatusCode};
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn empty_calendar() -> HolidayCalendar {
        HolidayCalendar::new(vec![], vec![], ConfiguredHolidays::default())
    }

    fn office_user() -> StaffUser {
        StaffUser {
            id: "emp_001".to_string(),
            role: "hr".to_string(),
        }
    }

    fn pair(user_id: &str, date: &str, check_in: &str, check_out: &str) -> Vec<AttendanceEvent> {
        vec![
            AttendanceEvent {
                user_id: user_id.to_string(),
                timestamp: make_datetime(date, check_in),
                kind: EventKind::CheckIn,
                location_name: None,
            },
            AttendanceEvent {
                user_id: user_id.to_string(),
                timestamp: make_datetime(date, check_out),
                kind: EventKind::CheckOut,
                location_name: None,
            },
        ]
    }

    /// Scenario: Monday to Friday worked 9h each, weekend idle, no holidays
    /// or leaves. Weekdays are P, Saturday A, Sunday W/O.
    #[test]
    fn test_plain_working_week() {
        // 2026-01-12 (Mon) .. 2026-01-18 (Sun)
        let range = ReportRange::new(make_date("2026-01-12"), make_date("2026-01-18")).unwrap();
        let mut events = Vec::new();
        for day in ["2026-01-12", "2026-01-13", "2026-01-14", "2026-01-15", "2026-01-16"] {
            events.extend(pair("emp_001", day, "09:00:00", "18:00:00"));
        }

        let daily =
            build_daily_log(&office_user(), &range, &empty_calendar(), &events, &[], &[]).unwrap();

        assert_eq!(daily.len(), 7);
        for record in &daily[0..5] {
            assert_eq!(record.status, StatusCode::Present, "{}", record.date);
        }
        assert_eq!(daily[5].status, StatusCode::Absent); // Saturday
        assert_eq!(daily[6].status, StatusCode::WeekOff); // Sunday, 1 absence in lookback
    }

    #[test]
    fn test_buffer_days_are_trimmed_from_output() {
        let range = ReportRange::new(make_date("2026-01-12"), make_date("2026-01-14")).unwrap();
        let daily =
            build_daily_log(&office_user(), &range, &empty_calendar(), &[], &[], &[]).unwrap();
        assert_eq!(daily.len(), 3);
        assert_eq!(daily[0].date, make_date("2026-01-12"));
        assert_eq!(daily[2].date, make_date("2026-01-14"));
    }

    #[test]
    fn test_first_sunday_of_range_sees_buffered_history() {
        // Range starts on a Sunday; the preceding week (inside the buffer)
        // is fully idle, so the lookback sees enough absences to escalate.
        let range = ReportRange::new(make_date("2026-01-18"), make_date("2026-01-18")).unwrap();
        let daily =
            build_daily_log(&office_user(), &range, &empty_calendar(), &[], &[], &[]).unwrap();
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].status, StatusCode::Absent);
    }

    #[test]
    fn test_first_sunday_stays_week_off_when_buffer_week_was_worked() {
        let range = ReportRange::new(make_date("2026-01-18"), make_date("2026-01-18")).unwrap();
        let mut events = Vec::new();
        for day in ["2026-01-12", "2026-01-13", "2026-01-14", "2026-01-15", "2026-01-16"] {
            events.extend(pair("emp_001", day, "09:00:00", "18:00:00"));
        }
        let daily =
            build_daily_log(&office_user(), &range, &empty_calendar(), &events, &[], &[]).unwrap();
        assert_eq!(daily[0].status, StatusCode::WeekOff);
    }

    #[test]
    fn test_other_users_events_are_ignored() {
        let range = ReportRange::new(make_date("2026-01-12"), make_date("2026-01-12")).unwrap();
        let events = pair("emp_999", "2026-01-12", "09:00:00", "18:00:00");
        let daily =
            build_daily_log(&office_user(), &range, &empty_calendar(), &events, &[], &[]).unwrap();
        assert_eq!(daily[0].status, StatusCode::Absent);
    }

    #[test]
    fn test_events_arriving_out_of_order_are_sorted_per_day() {
        let range = ReportRange::new(make_date("2026-01-12"), make_date("2026-01-12")).unwrap();
        let mut events = pair("emp_001", "2026-01-12", "09:00:00", "18:00:00");
        events.reverse();
        let daily =
            build_daily_log(&office_user(), &range, &empty_calendar(), &events, &[], &[]).unwrap();
        assert_eq!(daily[0].worked_minutes, 540);
    }

    /// Scenario: loss-of-pay leave spanning a weekday with no events counts
    /// absent and contributes nothing to payable days.
    #[test]
    fn test_loss_of_pay_day_in_monthly_report() {
        let range = ReportRange::new(make_date("2026-01-12"), make_date("2026-01-13")).unwrap();
        let events = pair("emp_001", "2026-01-13", "09:00:00", "18:00:00");
        let leaves = vec![LeaveInterval {
            user_id: "emp_001".to_string(),
            start_date: make_date("2026-01-12"),
            end_date: make_date("2026-01-12"),
            leave_type: "Loss of Pay".to_string(),
            status: LeaveStatus::Approved,
        }];

        let report = build_user_report(
            &office_user(),
            &range,
            &empty_calendar(),
            &events,
            &leaves,
            &[],
        )
        .unwrap();

        assert_eq!(report.counters.absent_days, 1);
        assert_eq!(report.counters.loss_of_pay_days, 1);
        assert_eq!(report.counters.present_days, 1);
        assert_eq!(report.total_payable_days, Decimal::ONE);
    }

    #[test]
    fn test_counters_reconcile_with_range_length() {
        let range = ReportRange::new(make_date("2026-01-01"), make_date("2026-01-31")).unwrap();
        let mut events = Vec::new();
        for day in 5..=9 {
            events.extend(pair(
                "emp_001",
                &format!("2026-01-{:02}", day),
                "09:00:00",
                "17:00:00",
            ));
        }
        let report =
            build_user_report(&office_user(), &range, &empty_calendar(), &events, &[], &[])
                .unwrap();
        assert_eq!(report.counters.exclusive_total() as i64, range.num_days());
        assert_eq!(report.per_day.len() as i64, range.num_days());
    }

    #[test]
    fn test_pool_holiday_reaches_the_classifier() {
        let range = ReportRange::new(make_date("2026-03-17"), make_date("2026-03-17")).unwrap();
        let pool = vec![PoolHoliday {
            user_id: "EMP_001".to_string(),
            holiday_date: "-03-17".to_string(),
        }];
        let daily =
            build_daily_log(&office_user(), &range, &empty_calendar(), &[], &[], &pool).unwrap();
        assert_eq!(daily[0].status, StatusCode::Holiday);
    }
}
