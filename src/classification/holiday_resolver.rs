//! Holiday resolution across the four holiday sources.
//!
//! A date can be a holiday for a user through four independently maintained
//! sources: the fixed company list, a recurring nth-weekday rule, the user's
//! own pool selection, or the admin-configured category list. Fixed, pool,
//! and configured OR into a single company-holiday flag; recurring is
//! tracked separately because its precedence differs in classification
//! (a recurring-holiday absence is `F/H`, not `H`).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::HolidayCalendar;
use crate::models::{PoolHoliday, StaffCategory};
use crate::models::user_id_matches;

use super::date_match::date_matches;

/// The outcome of resolving a date against all holiday sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCheck {
    /// True if the date is a fixed, pool, or configured holiday.
    pub is_company_holiday: bool,
    /// True if the date matches a recurring nth-weekday rule for the user's
    /// category. Tracked separately from the company flag.
    pub is_recurring_holiday: bool,
}

/// Returns the occurrence number of a date's weekday within its month
/// (1 for days 1-7, 2 for days 8-14, and so on).
///
/// # Example
///
/// ```
/// use attendance_engine::classification::occurrence_in_month;
/// use chrono::NaiveDate;
///
/// // 2026-01-10 is the 2nd Saturday of January 2026.
/// let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// assert_eq!(occurrence_in_month(date), 2);
/// ```
pub fn occurrence_in_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Resolves whether a date is a holiday for the given user.
///
/// The four checks are evaluated independently:
/// - Fixed: year-agnostic month/day equality against the calendar's fixed list.
/// - Recurring: weekday and occurrence equality, restricted to the rule's
///   category (rules default to office).
/// - Pool: lenient date match against the user's own pool entries, requiring
///   case/whitespace-insensitive user-id equality.
/// - Configured: lenient date match against the category's admin list.
pub fn resolve_holiday(
    date: NaiveDate,
    category: StaffCategory,
    calendar: &HolidayCalendar,
    pool: &[PoolHoliday],
    user_id: &str,
) -> HolidayCheck {
    let fixed = calendar
        .fixed()
        .iter()
        .any(|h| fixed_matches(&h.date, date));

    let recurring = calendar
        .recurring()
        .iter()
        .any(|rule| {
            rule.weekday == date.weekday()
                && rule.week == occurrence_in_month(date)
                && rule.category == category
        });

    let pool_hit = pool.iter().any(|h| {
        user_id_matches(&h.user_id, user_id) && date_matches(&h.holiday_date, date)
    });

    let configured = calendar
        .configured_for(category)
        .iter()
        .any(|entry| date_matches(entry, date));

    HolidayCheck {
        is_company_holiday: fixed || pool_hit || configured,
        is_recurring_holiday: recurring,
    }
}

/// Year-agnostic month/day comparison for fixed holiday entries.
///
/// Entries are nominally `MM-DD` but tolerate a leading year or stray
/// separators; anything unparsable simply does not match.
fn fixed_matches(entry: &str, date: NaiveDate) -> bool {
    let parts: Vec<u32> = entry
        .split(['-', '/'])
        .filter_map(|p| p.trim().parse().ok())
        .collect();
    match parts.as_slice() {
        // take the trailing month/day pair so "2020-01-26" matches too
        [.., month, day] => *month == date.month() && *day == date.day(),
        _ => false,
    }
}
