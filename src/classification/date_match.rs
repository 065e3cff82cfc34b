//! Lenient date matching for holiday date strings.
//!
//! Pool and configured holiday dates are entered through multiple independent
//! UI paths with inconsistent formats: full ISO `YYYY-MM-DD`, year-agnostic
//! `-MM-DD`, and free text with `-` or `/` separators. The matcher tolerates
//! all of them; unparsable input yields `false`, never an error.

use chrono::NaiveDate;

/// Minimum digit count a normalized candidate must have before the
/// stripped-separator fallback may match. Stops fragments like "6" from
/// matching every date.
const MIN_NORMALIZED_LEN: usize = 4;

/// Returns true if the candidate holiday date string refers to the target
/// calendar date.
///
/// Checks are applied in priority order:
/// 1. The candidate contains the target's full `YYYY-MM-DD` string.
/// 2. The candidate ends with the target's year-agnostic `-MM-DD` suffix.
/// 3. The candidate itself starts with `-MM-DD` and is a suffix of the
///    target's full date string.
/// 4. A normalized fallback strips all `-` and `/` separators from both
///    sides and checks substring containment.
///
/// # Examples
///
/// ```
/// use attendance_engine::classification::date_matches;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
/// assert!(date_matches("2026-01-26", date));
/// assert!(date_matches("Holiday on 2026-01-26 (observed)", date));
/// assert!(date_matches("-01-26", date));
/// assert!(date_matches("01/26", date));
/// assert!(!date_matches("2026-01-27", date));
/// assert!(!date_matches("not a date", date));
/// ```
pub fn date_matches(candidate: &str, target: NaiveDate) -> bool {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return false;
    }

    let full = target.format("%Y-%m-%d").to_string();
    if candidate.contains(&full) {
        return true;
    }

    let month_day = target.format("-%m-%d").to_string();
    if candidate.ends_with(&month_day) {
        return true;
    }

    if candidate.starts_with('-') && full.ends_with(candidate) {
        return true;
    }

    normalized_match(candidate, &full)
}

/// Separator-stripped fallback: keeps only non-separator characters and
/// checks containment in either direction.
fn normalized_match(candidate: &str, full: &str) -> bool {
    let norm_candidate: String = candidate
        .chars()
        .filter(|c| *c != '-' && *c != '/')
        .collect();
    if norm_candidate.len() < MIN_NORMALIZED_LEN {
        return false;
    }
    let norm_full: String = full.chars().filter(|c| *c != '-').collect();

    norm_candidate.contains(&norm_full) || norm_full.ends_with(&norm_candidate)
}
