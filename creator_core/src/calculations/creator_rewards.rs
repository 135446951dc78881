//! # Creator Rewards Program
//!
//! Payouts for qualified views (videos over one minute) at $0.40-$1.00 per
//! 1,000 views in the US, scaled by the audience region's RPM multiplier.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{EarningsRange, MONTHS_PER_YEAR};
use crate::tables::{MultiplierKind, RateTables, Region};
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// US payout per 1,000 qualified views
pub const REWARDS_RPM: EarningsRange = EarningsRange::new(0.40, 1.00);

pub const MIN_FOLLOWERS: f64 = 10_000.0;

pub const MIN_QUALIFIED_VIEWS: f64 = 100_000.0;

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("qualified_views", "Qualified views").min(0.0),
    FieldRule::number("followers", "Followers").min(0.0),
    FieldRule::choice("region", "Region", Region::CODES),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRewardsInput {
    /// Monthly views on videos longer than one minute
    pub qualified_views: f64,
    pub followers: f64,
    pub region: Region,
}

impl CreatorRewardsInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRewardsResult {
    /// Regional RPM band applied
    pub effective_rpm: EarningsRange,
    pub monthly_earnings: EarningsRange,
    pub annual_earnings: EarningsRange,
    pub eligible: bool,
}

pub fn calculate(input: &CreatorRewardsInput, tables: &RateTables) -> CreatorRewardsResult {
    let multiplier = tables
        .regions
        .apply_regional_multiplier(1.0, input.region, MultiplierKind::Rpm);
    let rpm = REWARDS_RPM.scale(multiplier);
    let monthly = rpm.for_views(input.qualified_views);

    CreatorRewardsResult {
        effective_rpm: rpm,
        monthly_earnings: monthly.rounded(),
        annual_earnings: monthly.scale(MONTHS_PER_YEAR).rounded(),
        eligible: input.followers >= MIN_FOLLOWERS && input.qualified_views >= MIN_QUALIFIED_VIEWS,
    }
}

pub struct CreatorRewards;

impl Calculator for CreatorRewards {
    type Input = CreatorRewardsInput;
    type Output = CreatorRewardsResult;

    const ID: &'static str = "creator_rewards";
    const NAME: &'static str = "Creator Rewards";
    const DESCRIPTION: &'static str = "Creator Rewards Program earnings for qualified views by region.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, tables: &RateTables) -> Self::Output {
        calculate(input, tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewards(region: Region) -> CreatorRewardsResult {
        calculate(
            &CreatorRewardsInput {
                qualified_views: 1_000_000.0,
                followers: 12_000.0,
                region,
            },
            RateTables::builtin(),
        )
    }

    #[test]
    fn test_us_rewards() {
        let result = rewards(Region::Us);
        assert_eq!(result.monthly_earnings, EarningsRange::new(400.0, 1000.0));
        assert_eq!(result.annual_earnings, EarningsRange::new(4800.0, 12000.0));
        assert!(result.eligible);
    }

    #[test]
    fn test_regional_scaling() {
        let result = rewards(Region::Uk);
        assert!((result.monthly_earnings.min - 340.0).abs() < 0.01);
        assert!((result.monthly_earnings.max - 850.0).abs() < 0.01);
        assert!(rewards(Region::Africa).monthly_earnings.max < result.monthly_earnings.max);
    }

    #[test]
    fn test_injected_tables_are_used() {
        let tables = RateTables::from_toml_str("[regions.us]\nrpm_multiplier = 0.5\n").unwrap();
        let result = calculate(
            &CreatorRewardsInput {
                qualified_views: 1_000_000.0,
                followers: 0.0,
                region: Region::Us,
            },
            &tables,
        );
        assert_eq!(result.monthly_earnings, EarningsRange::new(200.0, 500.0));
        assert!(!result.eligible);
    }
}
