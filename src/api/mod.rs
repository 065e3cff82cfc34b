//! HTTP API module for the attendance engine.
//!
//! This module provides the REST API endpoint for generating attendance
//! reports from already-fetched events, leaves, and pool holidays.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ReportResponse};
pub use state::AppState;
