//! Return on a single piece of content: what it earned against what it cost.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// excellent ≥ 100%, good 50-100%, average 0-50%, negative ROI below
pub const ROI_BANDS: Bands = Bands::new(100.0, 50.0, 0.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("production_cost", "Production cost").positive().step(0.01),
    FieldRule::number("revenue", "Revenue").min(0.0).step(0.01),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRoiInput {
    pub production_cost: f64,
    pub revenue: f64,
}

impl ContentRoiInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRoiResult {
    pub profit: f64,
    /// Percent of production cost
    pub roi: f64,
    pub break_even: bool,
    pub rating: Tier,
}

pub fn calculate(input: &ContentRoiInput) -> ContentRoiResult {
    let profit = input.revenue - input.production_cost;
    let roi = round2(percent_of(profit, input.production_cost));

    ContentRoiResult {
        profit: round2(profit),
        roi,
        break_even: profit >= 0.0,
        rating: ROI_BANDS.classify(roi),
    }
}

pub struct ContentRoi;

impl Calculator for ContentRoi {
    type Input = ContentRoiInput;
    type Output = ContentRoiResult;

    const ID: &'static str = "content_roi";
    const NAME: &'static str = "Content ROI";
    const DESCRIPTION: &'static str = "Profit and return on investment for a piece of content.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profitable_content() {
        let result = calculate(&ContentRoiInput {
            production_cost: 500.0,
            revenue: 1_500.0,
        });
        assert_eq!(result.profit, 1_000.0);
        assert_eq!(result.roi, 200.0);
        assert!(result.break_even);
        assert_eq!(result.rating, Tier::Excellent);
    }

    #[test]
    fn test_loss_is_below_average() {
        let result = calculate(&ContentRoiInput {
            production_cost: 800.0,
            revenue: 200.0,
        });
        assert_eq!(result.profit, -600.0);
        assert_eq!(result.roi, -75.0);
        assert!(!result.break_even);
        assert_eq!(result.rating, Tier::BelowAverage);
    }

    #[test]
    fn test_zero_cost_rejected() {
        let report = ContentRoiInput {
            production_cost: 0.0,
            revenue: 100.0,
        }
        .validate();
        assert!(!report.valid);
        assert!(report.errors.contains_key("production_cost"));
    }
}
