//! Follower growth rate over a period, with a projected monthly gain.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2, safe_div, DAYS_PER_MONTH};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const GROWTH_BANDS: Bands = Bands::new(20.0, 10.0, 5.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("starting_followers", "Starting followers").min(1.0),
    FieldRule::number("ending_followers", "Ending followers").min(0.0),
    FieldRule::number("period_days", "Period (days)").min(1.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateInput {
    pub starting_followers: f64,
    pub ending_followers: f64,
    pub period_days: f64,
}

impl GrowthRateInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateResult {
    pub net_change: f64,
    /// Percent change over the period; negative when followers were lost
    pub growth_rate: f64,
    pub average_daily_gain: f64,
    pub projected_monthly_gain: f64,
    pub rating: Tier,
}

pub fn calculate(input: &GrowthRateInput) -> GrowthRateResult {
    let net_change = input.ending_followers - input.starting_followers;
    let growth_rate = round2(percent_of(net_change, input.starting_followers));
    let daily = safe_div(net_change, input.period_days);

    GrowthRateResult {
        net_change,
        growth_rate,
        average_daily_gain: round2(daily),
        projected_monthly_gain: round2(daily * DAYS_PER_MONTH),
        rating: GROWTH_BANDS.classify(growth_rate),
    }
}

pub struct GrowthRate;

impl Calculator for GrowthRate {
    type Input = GrowthRateInput;
    type Output = GrowthRateResult;

    const ID: &'static str = "growth_rate";
    const NAME: &'static str = "Growth Rate";
    const DESCRIPTION: &'static str = "Percent follower growth over a period and the implied monthly gain.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_rate() {
        let result = calculate(&GrowthRateInput {
            starting_followers: 10_000.0,
            ending_followers: 12_000.0,
            period_days: 30.0,
        });
        assert_eq!(result.net_change, 2_000.0);
        assert_eq!(result.growth_rate, 20.0);
        assert_eq!(result.average_daily_gain, 66.67);
        assert_eq!(result.projected_monthly_gain, 2_000.0);
        assert_eq!(result.rating, Tier::Excellent);
    }

    #[test]
    fn test_follower_loss() {
        let result = calculate(&GrowthRateInput {
            starting_followers: 10_000.0,
            ending_followers: 9_500.0,
            period_days: 10.0,
        });
        assert_eq!(result.growth_rate, -5.0);
        assert_eq!(result.average_daily_gain, -50.0);
        assert_eq!(result.rating, Tier::BelowAverage);
    }
}
