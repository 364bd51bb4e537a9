//! Remote-first calculation with a local fallback.

use tracing::{debug, warn};

use crate::calculation::compute_input;
use crate::config::AppConfig;
use crate::models::{Calculation, CalculationInput, ResultSource};

use super::remote::{RemoteCalculator, RemoteError};

/// Produces a calculation result from the remote service when one is
/// configured, or from the in-process engine otherwise.
///
/// A call makes at most one remote attempt. Any failure of that attempt
/// is logged and answered by the local engine, so [`calculate`] never
/// fails.
///
/// [`calculate`]: CalculatorClient::calculate
///
/// # Example
///
/// ```
/// use calc_engine::client::CalculatorClient;
/// use calc_engine::models::{CalculationInput, ResultSource};
///
/// # tokio_test();
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn tokio_test() {
/// let client = CalculatorClient::local();
/// let result = client.calculate(&CalculationInput::new(5.0, 5.0, "+")).await;
/// assert_eq!(result.value, 10.0);
/// assert_eq!(result.source, ResultSource::Local);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorClient {
    remote: Option<RemoteCalculator>,
}

impl CalculatorClient {
    /// A client that always computes locally.
    pub fn local() -> Self {
        Self { remote: None }
    }

    /// A client that tries `remote` first.
    pub fn with_remote(remote: RemoteCalculator) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    /// Builds a client from the `remote` and `auth` sections of `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, RemoteError> {
        match &config.remote.base_url {
            Some(base_url) => {
                let remote = RemoteCalculator::new(
                    base_url,
                    config.remote.timeout(),
                    Some(config.auth.clone()),
                )?;
                Ok(Self::with_remote(remote))
            }
            None => Ok(Self::local()),
        }
    }

    /// Returns true if a remote endpoint is configured.
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Calculates `input`, preferring the remote service.
    pub async fn calculate(&self, input: &CalculationInput) -> Calculation {
        let Some(remote) = &self.remote else {
            debug!("No remote endpoint configured, computing locally");
            return local(input);
        };

        match remote.calculate(input).await {
            Ok(value) => Calculation {
                value,
                source: ResultSource::Remote,
            },
            Err(err) => {
                warn!(
                    endpoint = %remote.endpoint(),
                    error = %err,
                    "Remote calculation failed, falling back to local engine"
                );
                local(input)
            }
        }
    }
}

fn local(input: &CalculationInput) -> Calculation {
    Calculation {
        value: compute_input(input),
        source: ResultSource::Local,
    }
}
