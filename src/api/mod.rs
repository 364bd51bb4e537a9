//! HTTP API module for the calculation service.
//!
//! This module provides the REST endpoints: `POST /calculate` and the
//! `GET /` greeting, both behind basic authentication.

mod auth;
mod handlers;
mod request;
mod response;
mod state;

pub use auth::{AuthFailure, BASIC_CHALLENGE, basic_auth_header, check_credentials};
pub use handlers::{GREETING, create_router};
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
