//! Share ratio: how often viewers pass a video on.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, rate_per_thousand, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// excellent ≥ 3%, good 1-3%, average 0.5-1%
pub const VIRALITY_BANDS: Bands = Bands::new(3.0, 1.0, 0.5);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("views", "Views").min(1.0),
    FieldRule::number("shares", "Shares").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRatioInput {
    pub views: f64,
    pub shares: f64,
}

impl ShareRatioInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRatioResult {
    pub share_ratio: f64,
    pub shares_per_thousand: f64,
    pub virality: Tier,
}

pub fn calculate(input: &ShareRatioInput) -> ShareRatioResult {
    let share_ratio = round2(percent_of(input.shares, input.views));

    ShareRatioResult {
        share_ratio,
        shares_per_thousand: round2(rate_per_thousand(input.shares, input.views)),
        virality: VIRALITY_BANDS.classify(share_ratio),
    }
}

pub struct ShareRatio;

impl Calculator for ShareRatio {
    type Input = ShareRatioInput;
    type Output = ShareRatioResult;

    const ID: &'static str = "share_ratio";
    const NAME: &'static str = "Share Ratio";
    const DESCRIPTION: &'static str = "Shares as a percentage of views, with a virality rating.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_ratio() {
        let result = calculate(&ShareRatioInput {
            views: 50_000.0,
            shares: 1_500.0,
        });
        assert_eq!(result.share_ratio, 3.0);
        assert_eq!(result.shares_per_thousand, 30.0);
        assert_eq!(result.virality, Tier::Excellent);
    }

    #[test]
    fn test_low_share_ratio() {
        let result = calculate(&ShareRatioInput {
            views: 50_000.0,
            shares: 100.0,
        });
        assert_eq!(result.share_ratio, 0.2);
        assert_eq!(result.virality, Tier::BelowAverage);
    }
}
