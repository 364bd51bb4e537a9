//! Response types for the calculation service API.
//!
//! This module defines the success body of `/calculate`, the error response
//! structures and the mapping from [`EngineError`] to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Success body of `/calculate`: a bare JSON number.
///
/// JSON has no encoding for `NaN` or infinities, so any non-finite result
/// (including the not-a-number sentinel) is sent as `null` and read back as
/// `NaN`.
///
/// ```
/// use calc_engine::api::CalculationResponse;
///
/// assert_eq!(serde_json::to_string(&CalculationResponse::from_value(8.0)).unwrap(), "8.0");
/// assert_eq!(serde_json::to_string(&CalculationResponse::from_value(f64::NAN)).unwrap(), "null");
///
/// let decoded: CalculationResponse = serde_json::from_str("null").unwrap();
/// assert!(decoded.value().is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationResponse(pub Option<f64>);

impl CalculationResponse {
    /// Wraps an engine result for the wire.
    ///
    /// The engine only yields finite numbers or NaN; anything non-finite is
    /// sent as `null`.
    pub fn from_value(value: f64) -> Self {
        Self(Some(value).filter(|v| v.is_finite()))
    }

    /// Returns the numeric result, `NaN` for `null`.
    pub fn value(self) -> f64 {
        self.0.unwrap_or(f64::NAN)
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an authentication failure response.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MissingOperand { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Missing operand '{}'", field),
                    format!("Required operand '{}' was not provided in the request", field),
                ),
            },
            EngineError::InvalidOperand { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid operand '{}'", field),
                    format!("'{}' is not a number", value),
                ),
            },
            // Config errors are raised at startup, before the router exists, so
            // no handler returns one. This arm only keeps the match exhaustive.
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
        }
    }
}
