//! Basic authentication middleware.
//!
//! Every route requires `Authorization: Basic <base64(user:password)>`
//! matching the configured credentials. Failures get a `401` with a
//! `WWW-Authenticate` challenge; nothing is stored between requests.

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;
use tracing::warn;

use crate::config::AuthConfig;

use super::response::ApiError;
use super::state::AppState;

/// Challenge sent with every `401`.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"calculator\", charset=\"UTF-8\"";

/// Why a request failed authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// No `Authorization` header.
    #[error("Missing Authorization header")]
    Missing,
    /// The header is not a decodable `Basic` credential: wrong scheme, bad
    /// base64, invalid UTF-8 or no `:` separator.
    #[error("Malformed Basic credentials")]
    Malformed,
    /// Credentials decoded but did not match.
    #[error("Invalid credentials")]
    Invalid,
}

/// Rejects requests whose basic-auth credentials are missing or wrong.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match check_credentials(req.headers(), state.auth()) {
        Ok(()) => next.run(req).await,
        Err(failure) => {
            warn!(
                method = %req.method(),
                uri = %req.uri(),
                reason = %failure,
                "Rejected unauthenticated request"
            );
            unauthorized(failure)
        }
    }
}

/// Checks the `Authorization` header against the expected credentials.
pub fn check_credentials(headers: &HeaderMap, expected: &AuthConfig) -> Result<(), AuthFailure> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthFailure::Missing)?
        .to_str()
        .map_err(|_| AuthFailure::Malformed)?;

    let (scheme, encoded) = value.split_once(' ').ok_or(AuthFailure::Malformed)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthFailure::Malformed);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthFailure::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthFailure::Malformed)?;
    let (username, password) = decoded.split_once(':').ok_or(AuthFailure::Malformed)?;

    // Evaluate both comparisons so timing does not reveal which one failed.
    let username_ok = constant_time_eq(username.as_bytes(), expected.username.as_bytes());
    let password_ok = constant_time_eq(password.as_bytes(), expected.password.as_bytes());
    if username_ok & password_ok {
        Ok(())
    } else {
        Err(AuthFailure::Invalid)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn unauthorized(failure: AuthFailure) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            HeaderValue::from_static(BASIC_CHALLENGE),
        )],
        Json(ApiError::unauthorized(failure.to_string())),
    )
        .into_response()
}

/// Encodes credentials as an `Authorization` header value.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", username, password))
    )
}
