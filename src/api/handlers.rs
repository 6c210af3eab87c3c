//! HTTP request handlers for the settlement engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, validate_month};
use crate::models::MonthlyContext;

use super::request::{CalculationRequest, ValidationRequest, convert_days};
use super::response::{ApiError, ApiErrorResponse, HolidaysResponse, TiersResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/validate", post(validate_handler))
        .route("/holidays", get(holidays_handler))
        .route("/tiers", get(tiers_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into the API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

/// Handler for the POST /calculate endpoint.
///
/// Resolves the salary tier, converts the entered times, and runs the
/// monthly settlement.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let days = match convert_days(&request.days) {
        Ok(days) => days,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected day input");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let tier = match state.config().get_tier(&request.salary_tier) {
        Ok(tier) => tier.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                salary_tier = %request.salary_tier,
                "Salary tier not found"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let ctx = MonthlyContext::new(tier.monthly_salary, days);

    let start_time = Instant::now();
    match calculate(&ctx, state.calendar()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                salary_tier = %tier.name,
                days_count = ctx.days.len(),
                total_minutes = result.total_minutes_worked,
                total_payable = result.total_payable,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation refused"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /validate endpoint.
///
/// Checks the entered times without running a settlement, so the front
/// end can surface problems while the month is still being filled in.
async fn validate_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let days = match convert_days(&request.days) {
        Ok(days) => days,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected day input");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let report = validate_month(&days);
    info!(
        correlation_id = %correlation_id,
        days_count = days.len(),
        error_days = report.errors.len(),
        warnings = report.warnings.len(),
        "Validation completed"
    );
    (StatusCode::OK, Json(report)).into_response()
}

/// Handler for the GET /holidays endpoint.
async fn holidays_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HolidaysResponse {
        holidays: state.calendar().records().to_vec(),
    })
}

/// Handler for the GET /tiers endpoint.
async fn tiers_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(TiersResponse {
        tiers: state.config().tiers().to_vec(),
    })
}
