//! HTTP request handlers for the calculation service API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_input;

use super::auth::require_basic_auth;
use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Body returned by `GET /`.
pub const GREETING: &str = "Hello from the calculator service!";

/// Creates the API router with all endpoints behind basic auth.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/calculate", post(calculate_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ))
        .with_state(state)
}

/// Handler for GET / endpoint.
async fn greeting_handler() -> &'static str {
    GREETING
}

/// Handler for POST /calculate endpoint.
///
/// Accepts `{a, b, operator}` and returns the engine result as a bare
/// number (`null` for the not-a-number sentinel).
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

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
                JsonRejection::MissingJsonContentType(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "Missing JSON content type"
                    );
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                other => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %other,
                        "Unreadable request body"
                    );
                    ApiError::malformed_json("Failed to parse request body")
                }
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input = match request.into_input() {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected calculation request"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let result = compute_input(&input);
    info!(
        correlation_id = %correlation_id,
        operator = %input.operator,
        supported = input.operator.is_supported(),
        is_nan = result.is_nan(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalculationResponse::from_value(result)),
    )
        .into_response()
}
