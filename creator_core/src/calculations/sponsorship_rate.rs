//! View-based sponsorship pricing with a bundle discount for multi-post deals.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{per_thousand, round2};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// Deliverables from which the bundle discount applies
pub const BUNDLE_THRESHOLD: f64 = 3.0;

/// Bundle discount, percent
pub const BUNDLE_DISCOUNT_PERCENT: f64 = 10.0;

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("average_views", "Average views").min(0.0),
    FieldRule::number("sponsor_cpm", "Sponsor CPM").min(0.0).step(0.01),
    FieldRule::number("deliverables", "Deliverables").range(1.0, 20.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipRateInput {
    pub average_views: f64,
    pub sponsor_cpm: f64,
    /// Number of posts in the deal
    pub deliverables: f64,
}

impl SponsorshipRateInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipRateResult {
    pub price_per_post: f64,
    pub package_before_discount: f64,
    pub discount_percent: f64,
    pub package_total: f64,
}

pub fn calculate(input: &SponsorshipRateInput) -> SponsorshipRateResult {
    let per_post = per_thousand(input.average_views, input.sponsor_cpm);
    let gross = per_post * input.deliverables;
    let discount = if input.deliverables >= BUNDLE_THRESHOLD {
        BUNDLE_DISCOUNT_PERCENT
    } else {
        0.0
    };

    SponsorshipRateResult {
        price_per_post: round2(per_post),
        package_before_discount: round2(gross),
        discount_percent: discount,
        package_total: round2(gross * (1.0 - discount / 100.0)),
    }
}

pub struct SponsorshipRate;

impl Calculator for SponsorshipRate {
    type Input = SponsorshipRateInput;
    type Output = SponsorshipRateResult;

    const ID: &'static str = "sponsorship_rate";
    const NAME: &'static str = "Sponsorship Rate";
    const DESCRIPTION: &'static str = "Sponsored post pricing from average views and a sponsor CPM.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}
