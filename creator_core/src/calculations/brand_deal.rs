//! # Brand Deal Rate
//!
//! Suggested price range for one sponsored post.
//!
//! ```text
//! base      = followers / 1000 × [$10, $25]
//! per_post  = base × engagement_multiplier × niche.brand_deal_multiplier
//!                  × region.brand_deal_multiplier
//! suggested = midpoint(per_post)
//! ```
//!
//! | Engagement rate | Multiplier |
//! |-----------------|------------|
//! | ≥ 6%            | 1.5        |
//! | 3 - 6%          | 1.2        |
//! | 1 - 3%          | 1.0        |
//! | < 1%            | 0.8        |

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{round2, EarningsRange};
use crate::tables::{MultiplierKind, Niche, RateTables, Region};
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// US price per 1,000 followers for a single post
pub const BASE_RATE_PER_THOUSAND: EarningsRange = EarningsRange::new(10.0, 25.0);

/// (minimum engagement rate %, multiplier), checked top down
pub const ENGAGEMENT_MULTIPLIERS: [(f64, f64); 3] = [(6.0, 1.5), (3.0, 1.2), (1.0, 1.0)];

/// Multiplier below the lowest engagement step
pub const LOW_ENGAGEMENT_MULTIPLIER: f64 = 0.8;

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("followers", "Followers").min(0.0),
    FieldRule::number("engagement_rate", "Engagement rate").range(0.0, 100.0).step(0.1),
    FieldRule::choice("niche", "Niche", Niche::KEYS),
    FieldRule::choice("region", "Audience region", Region::CODES),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDealInput {
    pub followers: f64,
    /// Engagement rate, percent
    pub engagement_rate: f64,
    pub niche: Niche,
    pub region: Region,
}

impl BrandDealInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDealResult {
    pub rate_per_post: EarningsRange,
    pub suggested_rate: f64,
    pub engagement_multiplier: f64,
}

/// Multiplier for an engagement rate
pub fn engagement_multiplier(engagement_rate: f64) -> f64 {
    ENGAGEMENT_MULTIPLIERS
        .iter()
        .find(|(threshold, _)| engagement_rate >= *threshold)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(LOW_ENGAGEMENT_MULTIPLIER)
}

pub fn calculate(input: &BrandDealInput, tables: &RateTables) -> BrandDealResult {
    let engagement = engagement_multiplier(input.engagement_rate);
    let niche = tables.niches.get(input.niche).brand_deal_multiplier;
    let factor = tables
        .regions
        .apply_regional_multiplier(engagement * niche, input.region, MultiplierKind::BrandDeal);
    let rate = BASE_RATE_PER_THOUSAND.for_views(input.followers).scale(factor);

    BrandDealResult {
        rate_per_post: rate.rounded(),
        suggested_rate: round2(rate.midpoint()),
        engagement_multiplier: engagement,
    }
}

pub struct BrandDeal;

impl Calculator for BrandDeal {
    type Input = BrandDealInput;
    type Output = BrandDealResult;

    const ID: &'static str = "brand_deal";
    const NAME: &'static str = "Brand Deal Rate";
    const DESCRIPTION: &'static str = "Price range for a sponsored post by audience size, engagement, niche and region.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, tables: &RateTables) -> Self::Output {
        calculate(input, tables)
    }
}
