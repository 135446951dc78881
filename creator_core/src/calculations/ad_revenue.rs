//! # Ad Revenue Calculation
//!
//! Estimates in-feed ad revenue from monthly views, the advertiser CPM and
//! how many ad slots are served per thousand views.
//!
//! ```text
//! monthly_revenue  = monthly_views / 1000 × cpm × ad_frequency
//! annual_revenue   = monthly_revenue × 12
//! revenue_per_video = monthly_revenue / 30
//! ```
//!
//! ## Example
//!
//! ```rust
//! use creator_core::calculations::ad_revenue::{calculate, AdRevenueInput};
//!
//! let input = AdRevenueInput {
//!     monthly_views: 1_000_000.0,
//!     cpm: 5.0,
//!     ad_frequency: 1.0,
//! };
//! assert!(input.validate().valid);
//!
//! let result = calculate(&input);
//! assert_eq!(result.monthly_revenue, 5000.0);
//! assert_eq!(result.annual_revenue, 60000.0);
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{per_thousand, round2, MONTHS_PER_YEAR};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// Videos per month assumed when splitting revenue per video (one a day)
pub const VIDEOS_PER_MONTH: f64 = 30.0;

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("monthly_views", "Monthly views").min(0.0),
    FieldRule::number("cpm", "CPM").min(0.0).step(0.01),
    FieldRule::number("ad_frequency", "Ad frequency").range(1.0, 5.0),
];

/// Input parameters for ad revenue.
///
/// ## JSON Example
///
/// ```json
/// {
///   "monthly_views": 1000000.0,
///   "cpm": 5.0,
///   "ad_frequency": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRevenueInput {
    /// Views across all videos in a month
    pub monthly_views: f64,

    /// Advertiser cost per 1,000 impressions (USD)
    pub cpm: f64,

    /// Ads served per thousand views (1-5)
    pub ad_frequency: f64,
}

impl AdRevenueInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

/// Results from ad revenue calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "monthly_revenue": 5000.0,
///   "annual_revenue": 60000.0,
///   "revenue_per_video": 166.67
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRevenueResult {
    /// Estimated revenue per month (USD)
    pub monthly_revenue: f64,

    /// Monthly revenue × 12 (USD)
    pub annual_revenue: f64,

    /// Monthly revenue spread over [`VIDEOS_PER_MONTH`] (USD)
    pub revenue_per_video: f64,
}

/// Calculate ad revenue.
///
/// # Arguments
///
/// * `input` - Validated ad revenue parameters
pub fn calculate(input: &AdRevenueInput) -> AdRevenueResult {
    let monthly = per_thousand(input.monthly_views, input.cpm) * input.ad_frequency;

    AdRevenueResult {
        monthly_revenue: round2(monthly),
        annual_revenue: round2(monthly * MONTHS_PER_YEAR),
        revenue_per_video: round2(monthly / VIDEOS_PER_MONTH),
    }
}

pub struct AdRevenue;

impl Calculator for AdRevenue {
    type Input = AdRevenueInput;
    type Output = AdRevenueResult;

    const ID: &'static str = "ad_revenue";
    const NAME: &'static str = "Ad Revenue";
    const DESCRIPTION: &'static str = "Monthly and annual ad revenue from views, CPM and ad frequency.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}
