//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Data-shape anomalies (malformed holiday dates, missing check-ins, unknown
//! leave vocabulary) are never errors; they resolve leniently inside the
//! classification rules. Errors exist only for contract violations and for
//! configuration loading.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A recurring holiday rule in the calendar configuration was invalid.
    #[error("Invalid recurring holiday rule: {message}")]
    InvalidRecurringRule {
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A reporting range had its start date after its end date.
    #[error("Invalid report range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A day sequence passed to the weekend escalation pass was out of order
    /// or had gaps, which breaks the trailing lookback invariant.
    #[error("Unordered day sequence: expected {expected}, found {found}")]
    UnorderedDaySequence {
        /// The date the sequence should have contained at this position.
        expected: NaiveDate,
        /// The date actually found.
        found: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
