//! Core data models for the calculation service.
//!
//! This module contains the domain models shared by the HTTP service and
//! the client.

mod calculation;
mod operator;

pub use calculation::{Calculation, CalculationInput, ResultSource};
pub use operator::Operator;
