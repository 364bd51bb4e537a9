//! HTTP client for a remote calculation service.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::api::{CalculationRequest, CalculationResponse};
use crate::config::AuthConfig;
use crate::models::CalculationInput;

/// Why a remote calculation did not produce a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    Client {
        /// Underlying error description.
        message: String,
    },

    /// The endpoint URL could not be derived from the base URL.
    #[error("Invalid endpoint URL: {message}")]
    InvalidUrl {
        /// Underlying error description.
        message: String,
    },

    /// The request could not be sent or the connection failed.
    #[error("Request failed: {message}")]
    Request {
        /// Underlying error description.
        message: String,
    },

    /// No response arrived within the configured timeout.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that expired.
        timeout_ms: u128,
    },

    /// The service answered with a non-success status.
    #[error("Unexpected status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not a number or `null`.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Underlying error description.
        message: String,
    },
}

/// Client for `POST /calculate` on a remote service.
///
/// Makes exactly one request per call; retry and fallback decisions belong
/// to [`super::CalculatorClient`].
#[derive(Debug, Clone)]
pub struct RemoteCalculator {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
    auth: Option<AuthConfig>,
}

impl RemoteCalculator {
    /// Creates a client for the service at `base_url`.
    ///
    /// `base_url` may carry a path prefix; `calculate` is resolved beneath
    /// it.
    pub fn new(
        base_url: &Url,
        timeout: Duration,
        auth: Option<AuthConfig>,
    ) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            endpoint: endpoint_url(base_url)?,
            timeout,
            auth,
        })
    }

    /// Returns the full URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends `input` to the remote service and returns its result verbatim.
    pub async fn calculate(&self, input: &CalculationInput) -> Result<f64, RemoteError> {
        let mut request = self
            .http
            .post(self.endpoint.clone())
            .json(&CalculationRequest::from(input));
        if let Some(auth) = &self.auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let decoded: CalculationResponse =
            serde_json::from_slice(&body).map_err(|e| RemoteError::Decode {
                message: e.to_string(),
            })?;

        debug!(endpoint = %self.endpoint, "Remote calculation succeeded");
        Ok(decoded.value())
    }

    fn transport_error(&self, error: reqwest::Error) -> RemoteError {
        if error.is_timeout() {
            RemoteError::Timeout {
                timeout_ms: self.timeout.as_millis(),
            }
        } else {
            RemoteError::Request {
                message: error.to_string(),
            }
        }
    }
}

fn endpoint_url(base_url: &Url) -> Result<Url, RemoteError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("calculate").map_err(|e| RemoteError::InvalidUrl {
        message: e.to_string(),
    })
}
