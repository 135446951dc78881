//! Comment rate: comments as a percentage of views.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, rate_per_thousand, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const COMMENT_RATE_BANDS: Bands = Bands::new(1.0, 0.5, 0.1);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("views", "Views").min(1.0),
    FieldRule::number("comments", "Comments").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRateInput {
    pub views: f64,
    pub comments: f64,
}

impl CommentRateInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRateResult {
    pub comment_rate: f64,
    pub comments_per_thousand: f64,
    pub rating: Tier,
}

pub fn calculate(input: &CommentRateInput) -> CommentRateResult {
    let comment_rate = round2(percent_of(input.comments, input.views));

    CommentRateResult {
        comment_rate,
        comments_per_thousand: round2(rate_per_thousand(input.comments, input.views)),
        rating: COMMENT_RATE_BANDS.classify(comment_rate),
    }
}

pub struct CommentRate;

impl Calculator for CommentRate {
    type Input = CommentRateInput;
    type Output = CommentRateResult;

    const ID: &'static str = "comment_rate";
    const NAME: &'static str = "Comment Rate";
    const DESCRIPTION: &'static str = "Comments per view, a measure of conversation around a video.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_rate() {
        let result = calculate(&CommentRateInput {
            views: 40_000.0,
            comments: 120.0,
        });
        assert_eq!(result.comment_rate, 0.3);
        assert_eq!(result.comments_per_thousand, 3.0);
        assert_eq!(result.rating, Tier::Average);
    }
}
