//! Decimal rounding helpers.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `places` decimal places, midpoints away from zero.
///
/// Rounding goes through [`Decimal`] so that values such as `1.005`, which
/// are not exactly representable as `f64`, round the way they read. Values
/// outside the `Decimal` range fall back to scaled `f64` rounding, and
/// non-finite values are returned unchanged.
///
/// # Examples
///
/// ```
/// use calc_engine::calculation::round_to_places;
///
/// assert_eq!(round_to_places(2.345, 2), 2.35);
/// assert_eq!(round_to_places(-2.345, 2), -2.35);
/// assert_eq!(round_to_places(1.0 / 3.0, 2), 0.33);
/// ```
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| round_scaled(value, places))
}

fn round_scaled(value: f64, places: u32) -> f64 {
    // Every f64 at or above 2^52 is already whole.
    if value.fract() == 0.0 {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_to_places(0.125, 2), 0.13);
        assert_eq!(round_to_places(-0.125, 2), -0.13);
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_to_places(3.14159, 2), 3.14);
        assert_eq!(round_to_places(-3.14159, 2), -3.14);
    }

    #[test]
    fn test_decimal_literal_midpoint() {
        assert_eq!(round_to_places(1.005, 2), 1.01);
    }

    #[test]
    fn test_whole_numbers_unchanged() {
        assert_eq!(round_to_places(-9.0, 2), -9.0);
        assert_eq!(round_to_places(0.0, 2), 0.0);
    }

    #[test]
    fn test_zero_places() {
        assert_eq!(round_to_places(2.5, 0), 3.0);
    }

    #[test]
    fn test_non_finite_unchanged() {
        assert!(round_to_places(f64::NAN, 2).is_nan());
        assert_eq!(round_to_places(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_to_places(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }

    #[test]
    fn test_out_of_decimal_range() {
        assert_eq!(round_to_places(1e300, 2), 1e300);
        assert_eq!(round_to_places(-1e40, 2), -1e40);
    }

    #[test]
    fn test_scaled_fallback() {
        assert_eq!(round_scaled(2.344, 2), 2.34);
        assert_eq!(round_scaled(f64::MAX, 2), f64::MAX);
    }
}
