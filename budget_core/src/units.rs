//! # Unit Types
//!
//! Lightweight newtype wrappers for the units an opening estimate deals
//! with. They serialize as bare numbers so the JSON stays clean.
//!
//! - Length: centimeters (cm), as entered by the user
//! - Area: square centimeters (cm²) and square meters (m²)
//!
//! Prices are per square meter, so every area is converted to m² before
//! it is multiplied by a price.
//!
//! ## Example
//!
//! ```rust
//! use budget_core::units::{Centimeters, SquareMeters};
//!
//! let area = Centimeters(200.0) * Centimeters(150.0);
//! let area_m2: SquareMeters = area.into();
//! assert_eq!(area_m2.value(), 3.0);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Square centimeters in one square meter
pub const CM2_PER_M2: f64 = 10_000.0;

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl SquareMeters {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Mul for Centimeters {
    type Output = SquareCentimeters;
    fn mul(self, rhs: Self) -> Self::Output {
        SquareCentimeters(self.0 * rhs.0)
    }
}

impl From<SquareCentimeters> for SquareMeters {
    fn from(cm2: SquareCentimeters) -> Self {
        SquareMeters(cm2.0 / CM2_PER_M2)
    }
}

/// Round to two decimal places, half-up on the exact value of `value`.
///
/// The f64 is widened to a `Decimal` without first rounding it to its
/// shortest decimal form, so `0.0003 * 150` (stored just below 0.045)
/// rounds to 0.04. Non-finite input is returned unchanged.
///
/// Used only for presentation. Downstream arithmetic must keep using the
/// raw value.
pub fn round2(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    // mantissa / 100 is a single correctly rounded division
    rounded.mantissa() as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm2_to_m2() {
        let m2: SquareMeters = SquareCentimeters(30_000.0).into();
        assert_eq!(m2.value(), 3.0);
    }

    #[test]
    fn test_length_product_is_area() {
        let area = Centimeters(300.0) * Centimeters(200.0);
        assert_eq!(area, SquareCentimeters(60_000.0));
    }

    #[test]
    fn test_tiny_area() {
        let m2: SquareMeters = (Centimeters(1.0) * Centimeters(1.0)).into();
        assert!((m2.value() - 0.0001).abs() < 1e-12);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.0001), 0.0);
        assert_eq!(round2(0.012), 0.01);
        assert_eq!(round2(1.2), 1.2);
        assert_eq!(round2(2.345678), 2.35);
        assert_eq!(round2(360.0), 360.0);
        assert_eq!(round2(62.97102), 62.97);
    }

    #[test]
    fn test_round2_exact_midpoint_goes_up() {
        // 0.125 and 0.375 are exactly representable
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_round2_uses_stored_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round2(1.005), 1.0);
        // 0.005 is stored as 0.00500000000000000010...
        assert_eq!(round2(0.005), 0.01);
        // 0.0003 * 150 lands just below 0.045
        assert_eq!(round2(0.0003 * 150.0), 0.04);
        // 0.0019 * 150 lands just below 0.285
        assert_eq!(round2(0.0019 * 150.0), 0.28);
    }

    #[test]
    fn test_round2_non_finite_passthrough() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_serialization() {
        let width = Centimeters(120.5);
        let json = serde_json::to_string(&width).unwrap();
        assert_eq!(json, "120.5");

        let parsed: Centimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(width, parsed);
    }
}
