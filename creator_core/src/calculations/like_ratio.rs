//! Like ratio: likes as a percentage of views.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const LIKE_RATIO_BANDS: Bands = Bands::new(10.0, 5.0, 3.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("views", "Views").min(1.0),
    FieldRule::number("likes", "Likes").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeRatioInput {
    pub views: f64,
    pub likes: f64,
}

impl LikeRatioInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeRatioResult {
    pub like_ratio: f64,
    pub rating: Tier,
}

pub fn calculate(input: &LikeRatioInput) -> LikeRatioResult {
    let like_ratio = round2(percent_of(input.likes, input.views));

    LikeRatioResult {
        like_ratio,
        rating: LIKE_RATIO_BANDS.classify(like_ratio),
    }
}

pub struct LikeRatio;

impl Calculator for LikeRatio {
    type Input = LikeRatioInput;
    type Output = LikeRatioResult;

    const ID: &'static str = "like_ratio";
    const NAME: &'static str = "Like Ratio";
    const DESCRIPTION: &'static str = "Likes as a percentage of views.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_ratio() {
        let result = calculate(&LikeRatioInput {
            views: 20_000.0,
            likes: 1_200.0,
        });
        assert_eq!(result.like_ratio, 6.0);
        assert_eq!(result.rating, Tier::Good);
    }

    #[test]
    fn test_viral_like_ratio() {
        let result = calculate(&LikeRatioInput {
            views: 1_000.0,
            likes: 150.0,
        });
        assert_eq!(result.rating, Tier::Excellent);
    }
}
