//! The monthly aggregator.
//!
//! Folds a user's finalized daily status sequence into mutually exclusive
//! category counters and the weighted payable-day total used by payroll.

use rust_decimal::Decimal;

use crate::models::{DailyStatusRecord, MonthlyAggregate, StatusCode, StatusCounters};

/// Weight a half-day contributes to the payable-day total.
const HALF_DAY_WEIGHT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Aggregates a finalized day sequence into a [`MonthlyAggregate`].
///
/// Every record increments exactly one exclusive counter (`0.5P` increments
/// `half_days` by a whole 1); loss-of-pay records additionally increment the
/// `loss_of_pay_days` sub-counter. The payable total weighs half-days at 0.5
/// and gives absences, including loss-of-pay days, nothing.
///
/// Derived data: recomputed on every request, never persisted.
pub fn aggregate(user_id: &str, records: Vec<DailyStatusRecord>) -> MonthlyAggregate {
    let mut counters = StatusCounters::default();
    let mut total_worked_minutes: i64 = 0;
    let mut total_ot_minutes = Decimal::ZERO;

    for record in &records {
        match record.status {
            StatusCode::Present => counters.present_days += 1,
            StatusCode::HalfDay => counters.half_days += 1,
            StatusCode::Absent => {
                counters.absent_days += 1;
                if record.loss_of_pay {
                    counters.loss_of_pay_days += 1;
                }
            }
            StatusCode::Holiday => counters.holidays += 1,
            StatusCode::HolidayPresent => counters.holiday_presents += 1,
            StatusCode::FloatingHoliday => counters.floating_holidays += 1,
            StatusCode::WeekOff => counters.week_offs += 1,
            StatusCode::WeekendPresent => counters.weekend_presents += 1,
            StatusCode::WorkFromHome => counters.work_from_home_days += 1,
            StatusCode::SickLeave => counters.sick_leaves += 1,
            StatusCode::EarnedLeave => counters.earned_leaves += 1,
            StatusCode::CompOff => counters.comp_offs += 1,
        }
        total_worked_minutes += record.worked_minutes;
        total_ot_minutes += record.ot_minutes;
    }

    let total_payable_days = payable_days(&counters);

    MonthlyAggregate {
        user_id: user_id.to_string(),
        per_day: records,
        counters,
        total_payable_days,
        total_worked_minutes,
        total_ot_minutes,
    }
}

/// The weighted payable-day sum: every counter except absences, with
/// half-days at 0.5.
fn payable_days(counters: &StatusCounters) -> Decimal {
    let whole_days = counters.present_days
        + counters.week_offs
        + counters.holidays
        + counters.weekend_presents
        + counters.holiday_presents
        + counters.sick_leaves
        + counters.earned_leaves
        + counters.floating_holidays
        + counters.comp_offs
        + counters.work_from_home_days;

    Decimal::from(whole_days) + HALF_DAY_WEIGHT * Decimal::from(counters.half_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn sequence(statuses: &[StatusCode]) -> Vec<DailyStatusRecord> {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| DailyStatusRecord {
                user_id: "emp_001".to_string(),
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                status: *status,
                check_in: None,
                check_out: None,
                worked_minutes: 0,
                ot_minutes: Decimal::ZERO,
                loss_of_pay: false,
            })
            .collect()
    }

    use StatusCode::*;

    #[test]
    fn test_empty_sequence_aggregates_to_zero() {
        let result = aggregate("emp_001", vec![]);
        assert_eq!(result.counters.exclusive_total(), 0);
        assert_eq!(result.total_payable_days, Decimal::ZERO);
        assert_eq!(result.total_worked_minutes, 0);
    }

    #[test]
    fn test_each_status_increments_its_counter() {
        let records = sequence(&[
            Present,
            HalfDay,
            Absent,
            Holiday,
            HolidayPresent,
            FloatingHoliday,
            WeekOff,
            WeekendPresent,
            WorkFromHome,
            SickLeave,
            EarnedLeave,
            CompOff,
        ]);
        let result = aggregate("emp_001", records);
        let c = result.counters;
        assert_eq!(c.present_days, 1);
        assert_eq!(c.half_days, 1);
        assert_eq!(c.absent_days, 1);
        assert_eq!(c.holidays, 1);
        assert_eq!(c.holiday_presents, 1);
        assert_eq!(c.floating_holidays, 1);
        assert_eq!(c.week_offs, 1);
        assert_eq!(c.weekend_presents, 1);
        assert_eq!(c.work_from_home_days, 1);
        assert_eq!(c.sick_leaves, 1);
        assert_eq!(c.earned_leaves, 1);
        assert_eq!(c.comp_offs, 1);
        assert_eq!(c.loss_of_pay_days, 0);
        assert_eq!(c.exclusive_total(), 12);
        // 12 days, absence pays nothing, half-day pays 0.5: 10.5
        assert_eq!(result.total_payable_days, Decimal::new(105, 1));
    }

    #[test]
    fn test_half_day_counts_whole_but_pays_half() {
        let result = aggregate("emp_001", sequence(&[HalfDay, HalfDay]));
        assert_eq!(result.counters.half_days, 2);
        assert_eq!(result.total_payable_days, Decimal::ONE);
    }

    #[test]
    fn test_loss_of_pay_counts_absent_and_sub_counter() {
        let mut records = sequence(&[Absent, Absent]);
        records[0].loss_of_pay = true;
        let result = aggregate("emp_001", records);
        assert_eq!(result.counters.absent_days, 2);
        assert_eq!(result.counters.loss_of_pay_days, 1);
        assert_eq!(result.total_payable_days, Decimal::ZERO);
        // the sub-counter does not disturb the exclusivity sum
        assert_eq!(result.counters.exclusive_total(), 2);
    }

    #[test]
    fn test_worked_and_ot_totals_accumulate() {
        let mut records = sequence(&[Present, Present]);
        records[0].worked_minutes = 540;
        records[0].ot_minutes = Decimal::from(60);
        records[1].worked_minutes = 570;
        records[1].ot_minutes = Decimal::from(90);
        let result = aggregate("emp_001", records);
        assert_eq!(result.total_worked_minutes, 1110);
        assert_eq!(result.total_ot_minutes, Decimal::from(150));
    }

    #[test]
    fn test_full_month_counters_reconcile_with_day_count() {
        // 20 present, 4 week-offs, 2 half, 2 absent, 1 holiday, 1 sick, 1 wfh
        let mut statuses = vec![Present; 20];
        statuses.extend([WeekOff; 4]);
        statuses.extend([HalfDay, HalfDay, Absent, Absent, Holiday, SickLeave, WorkFromHome]);
        let result = aggregate("emp_001", sequence(&statuses));
        assert_eq!(result.counters.exclusive_total() as usize, 31);
        // 20 + 4 + 1 + 0 + 1 + 1 + 1 + 2*0.5
        assert_eq!(result.total_payable_days, Decimal::from(28));
    }

    fn arb_status() -> impl Strategy<Value = StatusCode> {
        prop::sample::select(vec![
            Present,
            HalfDay,
            Absent,
            Holiday,
            HolidayPresent,
            FloatingHoliday,
            WeekOff,
            WeekendPresent,
            WorkFromHome,
            SickLeave,
            EarnedLeave,
            CompOff,
        ])
    }

    proptest! {
        /// The exclusive counter sum always equals the day count.
        #[test]
        fn prop_counters_reconcile(statuses in prop::collection::vec(arb_status(), 0..120)) {
            let result = aggregate("emp_001", sequence(&statuses));
            prop_assert_eq!(result.counters.exclusive_total() as usize, statuses.len());
        }

        /// Payable days never exceed the day count and are never negative.
        #[test]
        fn prop_payable_days_bounded(statuses in prop::collection::vec(arb_status(), 0..120)) {
            let result = aggregate("emp_001", sequence(&statuses));
            prop_assert!(result.total_payable_days >= Decimal::ZERO);
            prop_assert!(result.total_payable_days <= Decimal::from(statuses.len() as u32));
        }
    }
}
