//! # Hashtag Engagement Lift
//!
//! Compares the engagement rate of posts using a hashtag against the
//! account's baseline engagement rate.
//!
//! ```text
//! engagement_lift = (hashtag_rate − baseline_rate) / baseline_rate × 100
//! ```
//!
//! A negative lift means the hashtag underperforms the baseline.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// excellent ≥ +50%, good +20-50%, average 0-20%, below-average when negative
pub const LIFT_BANDS: Bands = Bands::new(50.0, 20.0, 0.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("hashtag_engagement_rate", "Hashtag engagement rate").min(0.0).step(0.01),
    FieldRule::number("baseline_engagement_rate", "Baseline engagement rate").positive().step(0.01),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagEngagementInput {
    /// Engagement rate (%) on posts using the hashtag
    pub hashtag_engagement_rate: f64,
    /// Usual engagement rate (%) without it
    pub baseline_engagement_rate: f64,
}

impl HashtagEngagementInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagEngagementResult {
    /// Relative change versus baseline, percent
    pub engagement_lift: f64,
    pub outperforms_baseline: bool,
    pub rating: Tier,
}

pub fn calculate(input: &HashtagEngagementInput) -> HashtagEngagementResult {
    let difference = input.hashtag_engagement_rate - input.baseline_engagement_rate;
    let lift = round2(percent_of(difference, input.baseline_engagement_rate));

    HashtagEngagementResult {
        engagement_lift: lift,
        outperforms_baseline: difference > 0.0,
        rating: LIFT_BANDS.classify(lift),
    }
}

pub struct HashtagEngagement;

impl Calculator for HashtagEngagement {
    type Input = HashtagEngagementInput;
    type Output = HashtagEngagementResult;

    const ID: &'static str = "hashtag_engagement";
    const NAME: &'static str = "Hashtag Engagement";
    const DESCRIPTION: &'static str = "Engagement lift of hashtagged posts over your baseline.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}
