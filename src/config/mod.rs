//! Holiday calendar configuration for the attendance engine.
//!
//! Fixed, recurring, and configured holiday sources are admin-curated and
//! load from YAML; pool holidays are request data and live in
//! [`crate::models`].

mod loader;
mod types;

pub use loader::CalendarLoader;
pub use types::{
    ConfiguredHolidays, FixedHoliday, HolidayCalendar, RawCalendarConfig, RawRecurringRule,
    RecurringHolidayRule,
};
