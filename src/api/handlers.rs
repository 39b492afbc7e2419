//! HTTP request handlers for the hours engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_monthly_summaries_with_policy, validate_records};
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, MonthlySummary, SchoolYear};

use super::caller::Caller;
use super::request::{CalculationRequest, WorkedHoursQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/worked-hours", get(worked_hours_handler))
        .route("/worked-hours/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for GET /worked-hours.
///
/// Returns the monthly worked/extra hours of the caller (members) or of the
/// `userId` named in the query (admins) for one school year.
async fn worked_hours_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<WorkedHoursQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing worked hours request");

    let caller = match Caller::from_headers(&headers) {
        Ok(caller) => caller,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                status = %rejection.status,
                "Caller rejected"
            );
            return rejection.into_response();
        }
    };

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Query string error");
            return ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
                .into_response();
        }
    };

    let start_time = Instant::now();
    match summarize_for_caller(&state, &caller, &query) {
        Ok((user_id, summaries)) => {
            info!(
                correlation_id = %correlation_id,
                caller_id = caller.user_id,
                user_id,
                months = summaries.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Worked hours computed"
            );
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Worked hours request failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Resolves the target user and school year, reads the records and
/// aggregates them with the configured policy.
fn summarize_for_caller(
    state: &AppState,
    caller: &Caller,
    query: &WorkedHoursQuery,
) -> EngineResult<(u64, Vec<MonthlySummary>)> {
    let user_id = caller.target_user(query.user_id.as_deref())?;
    let school_year = SchoolYear::parse(query.school_year.as_deref().unwrap_or_default())?;

    let records =
        state
            .source()
            .records_between(user_id, school_year.start_date(), school_year.end_date())?;

    let summaries = summarize(state, school_year, &records)?;
    Ok((user_id, summaries))
}

/// Handler for POST /worked-hours/calculate.
///
/// Aggregates the records carried in the request body.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    let record_count = request.records.len();
    let result = SchoolYear::parse(&request.school_year).and_then(|school_year| {
        let records: Vec<AttendanceRecord> =
            request.records.into_iter().map(Into::into).collect();
        summarize(&state, school_year, &records)
    });

    match result {
        Ok(summaries) => {
            info!(
                correlation_id = %correlation_id,
                records = record_count,
                months = summaries.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Rejects inverted intervals inside the school year, then aggregates over it.
///
/// Records outside the school year are never aggregated, so they are not
/// validated either.
fn summarize(
    state: &AppState,
    school_year: SchoolYear,
    records: &[AttendanceRecord],
) -> EngineResult<Vec<MonthlySummary>> {
    validate_records(
        records
            .iter()
            .filter(|record| school_year.contains(record.date)),
    )?;
    Ok(compute_monthly_summaries_with_policy(
        records,
        school_year.start_date(),
        school_year.end_date(),
        state.config().hours_policy(),
    ))
}
