//! View-to-follower ratio: how far a typical video reaches relative to the
//! follower base.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const REACH_BANDS: Bands = Bands::new(50.0, 20.0, 10.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("average_views", "Average views").min(0.0),
    FieldRule::number("followers", "Followers").min(1.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRatioInput {
    pub average_views: f64,
    pub followers: f64,
}

impl ViewRatioInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRatioResult {
    pub views_per_follower: f64,
    pub reach: Tier,
}

pub fn calculate(input: &ViewRatioInput) -> ViewRatioResult {
    let views_per_follower = round2(percent_of(input.average_views, input.followers));

    ViewRatioResult {
        views_per_follower,
        reach: REACH_BANDS.classify(views_per_follower),
    }
}

pub struct ViewRatio;

impl Calculator for ViewRatio {
    type Input = ViewRatioInput;
    type Output = ViewRatioResult;

    const ID: &'static str = "view_ratio";
    const NAME: &'static str = "View-to-Follower Ratio";
    const DESCRIPTION: &'static str = "Average views as a percentage of followers.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_ratio() {
        let result = calculate(&ViewRatioInput {
            average_views: 5_000.0,
            followers: 20_000.0,
        });
        assert_eq!(result.views_per_follower, 25.0);
        assert_eq!(result.reach, Tier::Good);
    }
}
