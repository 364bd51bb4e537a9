//! Client side of the calculation service.
//!
//! [`RemoteCalculator`] talks to `POST /calculate`; [`CalculatorClient`]
//! decides between it and the local engine.

mod fallback;
mod remote;

pub use fallback::CalculatorClient;
pub use remote::{RemoteCalculator, RemoteError};
