//! Calculation logic for the calculation service.
//!
//! This module contains the arithmetic engine and the decimal rounding it
//! applies to division results.

mod engine;
mod rounding;

pub use engine::{DIVISION_DECIMAL_PLACES, compute, compute_input};
pub use rounding::round_to_places;
