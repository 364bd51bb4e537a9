//! The arithmetic engine.
//!
//! A single pure function shared by the HTTP handler and the client's local
//! fallback, so both sides always agree for the same inputs.

use crate::models::{CalculationInput, Operator};

use super::rounding::round_to_places;

/// Number of decimal places division results are rounded to.
pub const DIVISION_DECIMAL_PLACES: u32 = 2;

/// Applies `operator` to `a` and `b`.
///
/// Every input maps to a value; the function never panics or errors.
/// `f64::NAN` is the "no defined result" sentinel, returned for unknown
/// operators, for division by zero and for any result that overflows to an
/// infinity. Results are therefore always finite or NaN, which is also all
/// the wire format can carry.
///
/// | operator | result                                   |
/// |----------|------------------------------------------|
/// | `+`      | `a + b`                                  |
/// | `-`      | `a - b`                                  |
/// | `*`      | `a * b`                                  |
/// | `/`      | `a / b` rounded to 2 places, NaN if b=0  |
/// | `^`      | `a.powf(b)`                              |
/// | other    | NaN                                      |
///
/// Any infinite result from the first five rows becomes NaN.
///
/// # Examples
///
/// ```
/// use calc_engine::calculation::compute;
/// use calc_engine::models::Operator;
///
/// assert_eq!(compute(1.0, 2.0, &Operator::Add), 3.0);
/// assert_eq!(compute(99.0, -11.0, &Operator::Divide), -9.0);
/// assert_eq!(compute(2.0, -2.0, &Operator::Power), 0.25);
/// assert!(compute(2.0, 3.0, &Operator::from("%")).is_nan());
/// ```
pub fn compute(a: f64, b: f64, operator: &Operator) -> f64 {
    let result = match operator {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => divide(a, b),
        Operator::Power => a.powf(b),
        Operator::Unknown(_) => f64::NAN,
    };
    finite_or_nan(result)
}

fn finite_or_nan(value: f64) -> f64 {
    if value.is_infinite() { f64::NAN } else { value }
}

/// Computes the result for a validated input.
pub fn compute_input(input: &CalculationInput) -> f64 {
    compute(input.a, input.b, &input.operator)
}

fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }
    round_to_places(a / b, DIVISION_DECIMAL_PLACES)
}
