//! # Engagement Rate
//!
//! Interactions per follower, as a percentage:
//!
//! ```text
//! engagement_rate = (likes + comments + shares + saves) / followers × 100
//! ```
//!
//! `saves` is optional and defaults to zero.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// excellent ≥ 5%, good 2-5%, average 1-2%
pub const ENGAGEMENT_BANDS: Bands = Bands::new(5.0, 2.0, 1.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("followers", "Followers").min(1.0),
    FieldRule::number("likes", "Likes").min(0.0),
    FieldRule::number("comments", "Comments").min(0.0),
    FieldRule::number("shares", "Shares").min(0.0),
    FieldRule::number("saves", "Saves").min(0.0).optional(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRateInput {
    pub followers: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    #[serde(default)]
    pub saves: f64,
}

impl EngagementRateInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRateResult {
    pub total_engagements: f64,
    /// Percent of followers
    pub engagement_rate: f64,
    pub rating: Tier,
}

pub fn calculate(input: &EngagementRateInput) -> EngagementRateResult {
    let total = input.likes + input.comments + input.shares + input.saves;
    let rate = round2(percent_of(total, input.followers));

    EngagementRateResult {
        total_engagements: total,
        engagement_rate: rate,
        rating: ENGAGEMENT_BANDS.classify(rate),
    }
}

pub struct EngagementRate;

impl Calculator for EngagementRate {
    type Input = EngagementRateInput;
    type Output = EngagementRateResult;

    const ID: &'static str = "engagement_rate";
    const NAME: &'static str = "Engagement Rate";
    const DESCRIPTION: &'static str = "Likes, comments, shares and saves per follower.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(likes: f64) -> EngagementRateInput {
        EngagementRateInput {
            followers: 10_000.0,
            likes,
            comments: 50.0,
            shares: 30.0,
            saves: 20.0,
        }
    }

    #[test]
    fn test_engagement_rate() {
        let result = calculate(&input(400.0));
        assert_eq!(result.total_engagements, 500.0);
        assert_eq!(result.engagement_rate, 5.0);
        assert_eq!(result.rating, Tier::Excellent);
    }

    #[test]
    fn test_lower_tiers() {
        assert_eq!(calculate(&input(200.0)).rating, Tier::Good); // 3%
        assert_eq!(calculate(&input(50.0)).rating, Tier::Average); // 1.5%
        assert_eq!(calculate(&input(0.0)).rating, Tier::Average); // 1%, inclusive

        let quiet = EngagementRateInput {
            followers: 10_000.0,
            likes: 40.0,
            comments: 5.0,
            shares: 0.0,
            saves: 0.0,
        };
        assert_eq!(calculate(&quiet).engagement_rate, 0.45);
        assert_eq!(calculate(&quiet).rating, Tier::BelowAverage);
    }

    #[test]
    fn test_saves_optional_in_json() {
        let parsed: EngagementRateInput =
            serde_json::from_str(r#"{"followers": 100, "likes": 5, "comments": 0, "shares": 0}"#).unwrap();
        assert_eq!(parsed.saves, 0.0);
        assert_eq!(calculate(&parsed).engagement_rate, 5.0);
    }
}
