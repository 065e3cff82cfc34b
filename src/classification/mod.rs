//! Classification logic for the attendance engine.
//!
//! This module contains the rule engine: lenient date matching against the
//! inconsistently formatted holiday sources, holiday resolution across the
//! four sources, leave resolution, the daily status classifier, the weekend
//! escalation pass, the monthly aggregator, and the per-user report pipeline
//! that strings them together.

mod daily_status;
mod date_match;
mod holiday_resolver;
mod leave_resolver;
mod monthly_aggregate;
mod report;
mod weekend_escalation;

pub use daily_status::{
    DayInput, FULL_DAY_THRESHOLD_HOURS, HALF_DAY_THRESHOLD_HOURS, OVERTIME_THRESHOLD_HOURS,
    WORK_FROM_HOME_MARKER, classify_day,
};
pub use date_match::date_matches;
pub use holiday_resolver::{HolidayCheck, occurrence_in_month, resolve_holiday};
pub use leave_resolver::resolve_leave;
pub use monthly_aggregate::aggregate;
pub use report::{ESCALATION_BUFFER_DAYS, build_daily_log, build_user_report};
pub use weekend_escalation::{
    ESCALATION_ABSENCE_TRIGGER, ESCALATION_LOOKBACK_DAYS, escalate_weekends,
};
