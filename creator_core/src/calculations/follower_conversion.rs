//! # Follower Conversion
//!
//! Follows the funnel from followers to link clicks to purchases.
//!
//! ```text
//! click_through_rate      = website_clicks / followers × 100
//! conversion_rate         = purchases / website_clicks × 100
//! overall_conversion_rate = purchases / followers × 100
//! revenue                 = purchases × avg_order_value
//! ```
//!
//! ## Example
//!
//! ```rust
//! use creator_core::calculations::follower_conversion::{calculate, FollowerConversionInput};
//!
//! let result = calculate(&FollowerConversionInput {
//!     followers: 50_000.0,
//!     website_clicks: 2_500.0,
//!     purchases: 75.0,
//!     avg_order_value: 50.0,
//! });
//! assert_eq!(result.click_through_rate, 5.0);
//! assert_eq!(result.conversion_rate, 3.0);
//! assert_eq!(result.overall_conversion_rate, 0.15);
//! assert_eq!(result.revenue, 3750.0);
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2, round_to, safe_div};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("followers", "Followers").min(1.0),
    FieldRule::number("website_clicks", "Website clicks").min(1.0),
    FieldRule::number("purchases", "Purchases").min(0.0),
    FieldRule::number("avg_order_value", "Average order value").min(0.0).step(0.01),
];

/// Input parameters for the follower funnel.
///
/// ## JSON Example
///
/// ```json
/// {
///   "followers": 50000.0,
///   "website_clicks": 2500.0,
///   "purchases": 75.0,
///   "avg_order_value": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerConversionInput {
    pub followers: f64,
    /// Link-in-bio or product link clicks
    pub website_clicks: f64,
    pub purchases: f64,
    /// Average order value (USD)
    pub avg_order_value: f64,
}

impl FollowerConversionInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerConversionResult {
    /// Clicks per follower, percent
    pub click_through_rate: f64,
    /// Purchases per click, percent
    pub conversion_rate: f64,
    /// Purchases per follower, percent
    pub overall_conversion_rate: f64,
    /// Purchases × average order value (USD)
    pub revenue: f64,
    /// Revenue per follower (USD, 4 decimals)
    pub revenue_per_follower: f64,
}

pub fn calculate(input: &FollowerConversionInput) -> FollowerConversionResult {
    let revenue = input.purchases * input.avg_order_value;

    FollowerConversionResult {
        click_through_rate: round2(percent_of(input.website_clicks, input.followers)),
        conversion_rate: round2(percent_of(input.purchases, input.website_clicks)),
        overall_conversion_rate: round2(percent_of(input.purchases, input.followers)),
        revenue: round2(revenue),
        revenue_per_follower: round_to(safe_div(revenue, input.followers), 4),
    }
}

pub struct FollowerConversion;

impl Calculator for FollowerConversion {
    type Input = FollowerConversionInput;
    type Output = FollowerConversionResult;

    const ID: &'static str = "follower_conversion";
    const NAME: &'static str = "Follower Conversion";
    const DESCRIPTION: &'static str = "Click-through, conversion and revenue from followers to purchases.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> FollowerConversionInput {
        FollowerConversionInput {
            followers: 50_000.0,
            website_clicks: 2_500.0,
            purchases: 75.0,
            avg_order_value: 50.0,
        }
    }

    #[test]
    fn test_funnel() {
        let result = calculate(&test_input());
        assert_eq!(result.click_through_rate, 5.0);
        assert_eq!(result.conversion_rate, 3.0);
        assert_eq!(result.overall_conversion_rate, 0.15);
        assert_eq!(result.revenue, 3750.0);
        assert!((result.revenue_per_follower - 0.075).abs() < 1e-9);
    }

    #[test]
    fn test_zero_clicks_rejected() {
        let mut input = test_input();
        input.website_clicks = 0.0;
        let report = input.validate();
        assert_eq!(report.error_for("website_clicks"), Some("Website clicks must be at least 1"));
    }
}
