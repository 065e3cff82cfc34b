//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::build_user_report;
use crate::models::{
    AttendanceEvent, LeaveInterval, MonthlyAggregate, PoolHoliday, ReportRange, StaffUser,
};

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts a report request and returns per-user monthly aggregates.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the range before touching any user sequence
    let range = match ReportRange::new(request.range.start, request.range.end) {
        Ok(range) => range,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid report range"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let users: Vec<StaffUser> = request.users.into_iter().map(Into::into).collect();
    let events: Vec<AttendanceEvent> = request.events.into_iter().map(Into::into).collect();
    let leaves: Vec<LeaveInterval> = request.leaves.into_iter().map(Into::into).collect();
    let pool: Vec<PoolHoliday> = request.pool_holidays.into_iter().map(Into::into).collect();

    let calendar = state.calendar().calendar();

    // Each user's day sequence is independent; classification within a user
    // is strictly chronological because of the escalation pass.
    let start_time = Instant::now();
    let mut results: Vec<MonthlyAggregate> = Vec::with_capacity(users.len());
    for user in &users {
        match build_user_report(user, &range, calendar, &events, &leaves, &pool) {
            Ok(aggregate) => results.push(aggregate),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    user_id = %user.id,
                    error = %err,
                    "Report generation failed"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        }
    }

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        users_count = results.len(),
        days = range.num_days(),
        duration_us = duration.as_micros(),
        "Report generated successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ReportResponse { results }),
    )
        .into_response()
}
