//! # Shared Equations
//!
//! Small arithmetic building blocks reused by every calculator. Keeping them
//! in one place keeps rounding and the zero-denominator rule consistent.
//!
//! ## Zero denominators
//!
//! Validators reject zero denominators before a formula runs. The helpers
//! below still define `x / 0 = 0` so a formula called on unvalidated input
//! produces a finite number instead of `NaN` or `Infinity`.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::equations::{per_thousand, percent_of, round2};
//!
//! assert_eq!(percent_of(1_000.0, 50_000.0), 2.0);
//! assert_eq!(round2(per_thousand(1_000_000.0, 5.0)), 5000.0);
//! assert_eq!(percent_of(5.0, 0.0), 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Months used for annual projections
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Days used when converting daily figures to months
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Round to a fixed number of decimal places.
///
/// Values too large to scale are returned unchanged; they carry no
/// fractional digits at that magnitude anyway.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round to cents / two-decimal percentages.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Divide, yielding 0 when the denominator is zero.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `part` as a percentage of `whole` (unrounded).
pub fn percent_of(part: f64, whole: f64) -> f64 {
    safe_div(part, whole) * 100.0
}

/// Apply a percentage rate (0-100) to an amount.
pub fn apply_percent(amount: f64, rate_percent: f64) -> f64 {
    amount * rate_percent / 100.0
}

/// Earnings for `count` units at `rate` per thousand units (RPM/CPM style).
pub fn per_thousand(count: f64, rate: f64) -> f64 {
    count / 1000.0 * rate
}

/// Rate per thousand units given total money and unit count.
pub fn rate_per_thousand(total: f64, count: f64) -> f64 {
    safe_div(total, count) * 1000.0
}

/// A min/max pair, used for earnings estimates and rate bands.
///
/// ## JSON Example
///
/// ```json
/// { "min": 20.0, "max": 40.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EarningsRange {
    pub min: f64,
    pub max: f64,
}

impl EarningsRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Average of the two bounds
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Multiply both bounds by a factor
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    /// Earnings range for a view count at this per-thousand rate range
    pub fn for_views(&self, views: f64) -> Self {
        Self::new(per_thousand(views, self.min), per_thousand(views, self.max))
    }

    /// Round both bounds to cents
    pub fn rounded(&self) -> Self {
        Self::new(round2(self.min), round2(self.max))
    }

    /// Bound-wise sum
    pub fn add(&self, other: &EarningsRange) -> Self {
        Self::new(self.min + other.min, self.max + other.max)
    }

    /// True when min <= max and both bounds are finite
    pub fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round_to(0.030_000_000_000_000_002, 4), 0.03);
        assert_eq!(round2(-2.499), -2.5);
    }

    #[test]
    fn test_round_huge_values_stay_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round_to(f64::MAX, 4), f64::MAX);
        assert!(round2(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_zero_denominator_is_zero() {
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(percent_of(10.0, 0.0), 0.0);
        assert_eq!(rate_per_thousand(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_range_for_views() {
        let rpm = EarningsRange::new(0.02, 0.04);
        let earned = rpm.for_views(1_000_000.0).rounded();
        assert_eq!(earned, EarningsRange::new(20.0, 40.0));
        assert_eq!(earned.midpoint(), 30.0);
    }

    #[test]
    fn test_range_ordering() {
        assert!(EarningsRange::new(1.0, 2.0).is_ordered());
        assert!(!EarningsRange::new(2.0, 1.0).is_ordered());
        assert!(!EarningsRange::new(f64::NAN, 1.0).is_ordered());
    }
}
