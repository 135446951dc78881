//! CPM: what an advertiser paid (or a creator charged) per 1,000 impressions.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{rate_per_thousand, round_to, safe_div};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("total_revenue", "Total revenue").min(0.0).step(0.01),
    FieldRule::number("impressions", "Impressions").min(1.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpmInput {
    pub total_revenue: f64,
    pub impressions: f64,
}

impl CpmInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpmResult {
    pub cpm: f64,
    pub cost_per_view: f64,
}

pub fn calculate(input: &CpmInput) -> CpmResult {
    CpmResult {
        cpm: round_to(rate_per_thousand(input.total_revenue, input.impressions), 4),
        cost_per_view: round_to(safe_div(input.total_revenue, input.impressions), 6),
    }
}

pub struct Cpm;

impl Calculator for Cpm {
    type Input = CpmInput;
    type Output = CpmResult;

    const ID: &'static str = "cpm";
    const NAME: &'static str = "CPM";
    const DESCRIPTION: &'static str = "Cost per 1,000 impressions from total revenue and impressions.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpm() {
        let result = calculate(&CpmInput {
            total_revenue: 250.0,
            impressions: 50_000.0,
        });
        assert_eq!(result.cpm, 5.0);
        assert_eq!(result.cost_per_view, 0.005);
    }

    #[test]
    fn test_unvalidated_zero_impressions_is_finite() {
        let result = calculate(&CpmInput {
            total_revenue: 250.0,
            impressions: 0.0,
        });
        assert_eq!(result.cpm, 0.0);
        assert!(!CpmInput { total_revenue: 250.0, impressions: 0.0 }.validate().valid);
    }
}
