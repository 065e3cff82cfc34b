//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CalendarLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded holiday calendar.
#[derive(Clone)]
pub struct AppState {
    /// The loaded holiday calendar.
    calendar: Arc<CalendarLoader>,
}

impl AppState {
    /// Creates a new application state with the given calendar loader.
    pub fn new(calendar: CalendarLoader) -> Self {
        Self {
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the calendar loader.
    pub fn calendar(&self) -> &CalendarLoader {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
