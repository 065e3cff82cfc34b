//! Holiday calendar configuration types.
//!
//! Raw shapes are deserialized from YAML and validated into a
//! [`HolidayCalendar`]: recurring rules are admin-curated and validated
//! eagerly at load time, unlike request-borne pool dates which stay lenient.

use chrono::Weekday;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::StaffCategory;

/// A fixed, company-wide, year-agnostic holiday.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedHoliday {
    /// The holiday date, nominally `MM-DD`.
    pub date: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Admin-configured holiday date lists, one per staff category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfiguredHolidays {
    /// Dates for office staff, format not guaranteed.
    #[serde(default)]
    pub office: Vec<String>,
    /// Dates for field staff, format not guaranteed.
    #[serde(default)]
    pub field: Vec<String>,
}

impl ConfiguredHolidays {
    /// Returns the list for the given category.
    pub fn for_category(&self, category: StaffCategory) -> &[String] {
        match category {
            StaffCategory::Office => &self.office,
            StaffCategory::Field => &self.field,
        }
    }
}

/// A recurring nth-weekday holiday rule as it appears in YAML, before
/// validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecurringRule {
    /// Weekday name (e.g., "saturday" or "sat").
    pub day: String,
    /// Occurrence in the month, 1 through 5 (e.g., 2 for "2nd Saturday").
    pub week: u32,
    /// The staff category the rule applies to.
    #[serde(default = "default_rule_category")]
    pub category: StaffCategory,
}

fn default_rule_category() -> StaffCategory {
    StaffCategory::Office
}

/// A validated recurring nth-weekday holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringHolidayRule {
    /// The weekday the rule fires on.
    pub weekday: Weekday,
    /// Occurrence in the month, 1 through 5.
    pub week: u32,
    /// The staff category the rule applies to.
    pub category: StaffCategory,
}

impl RawRecurringRule {
    /// Validates the raw rule into a [`RecurringHolidayRule`].
    pub fn validate(&self) -> EngineResult<RecurringHolidayRule> {
        let weekday: Weekday =
            self.day
                .trim()
                .parse()
                .map_err(|_| EngineError::InvalidRecurringRule {
                    message: format!("unknown weekday '{}'", self.day),
                })?;
        if !(1..=5).contains(&self.week) {
            return Err(EngineError::InvalidRecurringRule {
                message: format!("week {} is outside 1..=5", self.week),
            });
        }
        Ok(RecurringHolidayRule {
            weekday,
            week: self.week,
            category: self.category,
        })
    }
}

/// The calendar configuration file as deserialized from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCalendarConfig {
    /// Fixed company-wide holidays.
    #[serde(default)]
    pub fixed: Vec<FixedHoliday>,
    /// Recurring nth-weekday rules.
    #[serde(default)]
    pub recurring: Vec<RawRecurringRule>,
    /// Per-category configured holiday lists.
    #[serde(default)]
    pub configured: ConfiguredHolidays,
}

/// The validated holiday calendar consumed by the holiday resolver.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    fixed: Vec<FixedHoliday>,
    recurring: Vec<RecurringHolidayRule>,
    configured: ConfiguredHolidays,
}

impl HolidayCalendar {
    /// Creates a calendar from validated parts.
    pub fn new(
        fixed: Vec<FixedHoliday>,
        recurring: Vec<RecurringHolidayRule>,
        configured: ConfiguredHolidays,
    ) -> Self {
        Self {
            fixed,
            recurring,
            configured,
        }
    }

    /// Validates a raw configuration into a calendar.
    pub fn from_raw(raw: RawCalendarConfig) -> EngineResult<Self> {
        let recurring = raw
            .recurring
            .iter()
            .map(RawRecurringRule::validate)
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(Self::new(raw.fixed, recurring, raw.configured))
    }

    /// The fixed company-wide holidays.
    pub fn fixed(&self) -> &[FixedHoliday] {
        &self.fixed
    }

    /// The validated recurring rules.
    pub fn recurring(&self) -> &[RecurringHolidayRule] {
        &self.recurring
    }

    /// The configured holiday list for a category.
    pub fn configured_for(&self, category: StaffCategory) -> &[String] {
        self.configured.for_category(category)
    }
}
