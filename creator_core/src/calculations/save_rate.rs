//! # Save Rate
//!
//! Share of viewers who bookmarked a video, a strong signal of content value.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// excellent ≥ 5%, good 2-5%, average 1-2%
pub const SAVE_RATE_BANDS: Bands = Bands::new(5.0, 2.0, 1.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("views", "Views").min(1.0),
    FieldRule::number("saves", "Saves").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRateInput {
    pub views: f64,
    pub saves: f64,
}

impl SaveRateInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRateResult {
    /// Saves per view, percent
    pub save_rate: f64,
    pub content_value_rating: Tier,
}

pub fn calculate(input: &SaveRateInput) -> SaveRateResult {
    let save_rate = round2(percent_of(input.saves, input.views));

    SaveRateResult {
        save_rate,
        content_value_rating: SAVE_RATE_BANDS.classify(save_rate),
    }
}

pub struct SaveRate;

impl Calculator for SaveRate {
    type Input = SaveRateInput;
    type Output = SaveRateResult;

    const ID: &'static str = "save_rate";
    const NAME: &'static str = "Save Rate";
    const DESCRIPTION: &'static str = "Percentage of viewers who saved a video.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_rate() {
        let result = calculate(&SaveRateInput {
            views: 50_000.0,
            saves: 1_000.0,
        });
        assert_eq!(result.save_rate, 2.0);
        assert_eq!(result.content_value_rating, Tier::Good);
    }

    #[test]
    fn test_rating_never_drops_as_saves_grow() {
        let mut previous = Tier::BelowAverage;
        for saves in (0..=4_000).step_by(25) {
            let rating = calculate(&SaveRateInput {
                views: 50_000.0,
                saves: saves as f64,
            })
            .content_value_rating;
            assert!(rating >= previous);
            previous = rating;
        }
        assert_eq!(previous, Tier::Excellent);
    }

    #[test]
    fn test_missing_views_rejected() {
        let report = SaveRateInput {
            views: 0.0,
            saves: -3.0,
        }
        .validate();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
    }
}
