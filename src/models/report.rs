//! Reporting range and monthly aggregate models.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DailyStatusRecord;

/// An inclusive reporting date range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportRange;
/// use chrono::NaiveDate;
///
/// let range = ReportRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// ).unwrap();
/// assert_eq!(range.num_days(), 31);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRange {
    /// The start date (inclusive).
    pub start: NaiveDate,
    /// The end date (inclusive).
    pub end: NaiveDate,
}

impl ReportRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the number of days in the range, inclusive of both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns true if the date falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates every day of the range in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start
            .iter_days()
            .take_while(move |d| *d <= end)
    }

    /// Returns the range extended backwards by `buffer_days`, used to give
    /// the weekend escalation pass lookback history at the start of a month.
    pub fn with_lookback_buffer(&self, buffer_days: u64) -> Self {
        Self {
            start: self
                .start
                .checked_sub_days(Days::new(buffer_days))
                .unwrap_or(self.start),
            end: self.end,
        }
    }
}

/// Per-status counters for a reporting period.
///
/// The first twelve counters are mutually exclusive: every day in the period
/// increments exactly one of them. `loss_of_pay_days` is a sub-count of
/// `absent_days` and is excluded from the exclusivity sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounters {
    /// Days classified `P`.
    pub present_days: u32,
    /// Days classified `A` (includes loss-of-pay days).
    pub absent_days: u32,
    /// Days classified `0.5P` (counted as whole days here; weighted 0.5 in
    /// payable days).
    pub half_days: u32,
    /// Days classified `W/O`.
    pub week_offs: u32,
    /// Days classified `H`.
    pub holidays: u32,
    /// Days classified `W/P`.
    pub weekend_presents: u32,
    /// Days classified `H/P`.
    pub holiday_presents: u32,
    /// Days classified `S/L`.
    pub sick_leaves: u32,
    /// Days classified `E/L`.
    pub earned_leaves: u32,
    /// Days classified `F/H`.
    pub floating_holidays: u32,
    /// Days classified `C/O`.
    pub comp_offs: u32,
    /// Days classified `W/H`.
    pub work_from_home_days: u32,
    /// Loss-of-pay days; a sub-count of `absent_days`.
    pub loss_of_pay_days: u32,
}

impl StatusCounters {
    /// Sum of the mutually exclusive counters.
    ///
    /// For any contiguous reporting range this equals the day count of the
    /// range. `loss_of_pay_days` is excluded because it double-counts a
    /// subset of `absent_days`.
    pub fn exclusive_total(&self) -> u32 {
        self.present_days
            + self.absent_days
            + self.half_days
            + self.week_offs
            + self.holidays
            + self.weekend_presents
            + self.holiday_presents
            + self.sick_leaves
            + self.earned_leaves
            + self.floating_holidays
            + self.comp_offs
            + self.work_from_home_days
    }
}

/// The aggregated attendance report for one user over one reporting range.
///
/// Derived data: recomputed on every report request, never persisted by the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// The user this aggregate belongs to.
    pub user_id: String,
    /// The finalized day sequence, chronological, trimmed to the requested
    /// range.
    pub per_day: Vec<DailyStatusRecord>,
    /// Per-status counters.
    pub counters: StatusCounters,
    /// Weighted payable-day total (half-days contribute 0.5; loss-of-pay
    /// days contribute nothing).
    pub total_payable_days: Decimal,
    /// Total worked minutes across the range.
    pub total_worked_minutes: i64,
    /// Total overtime minutes across the range.
    pub total_ot_minutes: Decimal,
}
