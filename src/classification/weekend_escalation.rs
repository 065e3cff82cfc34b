//! The weekend escalation pass.
//!
//! A second, order-dependent pass over a user's chronological day sequence:
//! a `W/O` Sunday preceded by enough absences in the trailing window is
//! retroactively rewritten to `A`. The pass is non-cascading: lookback counts
//! read the original, unescalated statuses, so a Sunday escalated earlier in
//! the same pass never feeds a later Sunday's count.

use chrono::{Datelike, Days, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyStatusRecord, StatusCode};

/// How many trailing records the lookback window covers.
pub const ESCALATION_LOOKBACK_DAYS: usize = 6;

/// How many absences in the lookback window escalate a `W/O` Sunday to `A`.
pub const ESCALATION_ABSENCE_TRIGGER: usize = 4;

/// Runs the escalation pass over a chronologically ordered, gap-free day
/// sequence for one user.
///
/// For each record whose status is `W/O` and whose date is a Sunday, the
/// pass counts `A` records among the previous [`ESCALATION_LOOKBACK_DAYS`]
/// entries of the *input* sequence; at [`ESCALATION_ABSENCE_TRIGGER`] or
/// more, the Sunday is rewritten to `A`. No other record is touched.
///
/// Callers are expected to include a lookback buffer of at least seven days
/// before the reporting window so the first Sunday of a month has history;
/// see [`super::build_user_report`].
///
/// # Errors
///
/// Returns [`EngineError::UnorderedDaySequence`] if consecutive records are
/// not exactly one day apart: an unordered or gapped sequence breaks the
/// lookback invariant, which is a caller contract violation rather than a
/// data anomaly.
pub fn escalate_weekends(
    records: &[DailyStatusRecord],
) -> EngineResult<Vec<DailyStatusRecord>> {
    for pair in records.windows(2) {
        let expected = pair[0]
            .date
            .checked_add_days(Days::new(1))
            .unwrap_or(pair[0].date);
        if pair[1].date != expected {
            return Err(EngineError::UnorderedDaySequence {
                expected,
                found: pair[1].date,
            });
        }
    }

    let mut escalated: Vec<DailyStatusRecord> = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let mut out = record.clone();
        if record.status == StatusCode::WeekOff && record.date.weekday() == Weekday::Sun {
            let window_start = i.saturating_sub(ESCALATION_LOOKBACK_DAYS);
            // count from the input snapshot, not from already-escalated output
            let absences = records[window_start..i]
                .iter()
                .filter(|r| r.status == StatusCode::Absent)
                .count();
            if absences >= ESCALATION_ABSENCE_TRIGGER {
                out.status = StatusCode::Absent;
            }
        }
        escalated.push(out);
    }

    Ok(escalated)
}
