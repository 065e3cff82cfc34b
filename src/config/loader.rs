//! Calendar configuration loading.
//!
//! This module provides the [`CalendarLoader`] type for loading the holiday
//! calendar from YAML.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidayCalendar, RawCalendarConfig};

/// Loads and provides access to the holiday calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/holidays/
/// └── calendar.yaml   # fixed / recurring / configured holiday sections
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::CalendarLoader;
///
/// let loader = CalendarLoader::load("./config/holidays")?;
/// let calendar = loader.calendar();
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    calendar: HolidayCalendar,
}

impl CalendarLoader {
    /// Loads the calendar from `calendar.yaml` in the given directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file is missing
    /// - [`EngineError::ConfigParseError`] for invalid YAML
    /// - [`EngineError::InvalidRecurringRule`] for an unparsable recurring rule
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let calendar_path = path.as_ref().join("calendar.yaml");
        let path_str = calendar_path.display().to_string();

        let content =
            fs::read_to_string(&calendar_path).map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a calendar from an in-memory YAML string.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path_str: &str) -> EngineResult<Self> {
        let raw: RawCalendarConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            calendar: HolidayCalendar::from_raw(raw)?,
        })
    }

    /// Returns the validated calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
