//! # Creator Fund
//!
//! Legacy Creator Fund payouts at a fixed $0.02-$0.04 per 1,000 views, plus
//! the program's eligibility thresholds.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{EarningsRange, MONTHS_PER_YEAR};
use crate::tables::{RateTables, US_BASE_RPM};
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// Followers required to join
pub const MIN_FOLLOWERS: f64 = 10_000.0;

/// Views in the last 30 days required to join
pub const MIN_MONTHLY_VIEWS: f64 = 100_000.0;

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("monthly_views", "Monthly views").min(0.0),
    FieldRule::number("followers", "Followers").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorFundInput {
    pub monthly_views: f64,
    pub followers: f64,
}

impl CreatorFundInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorFundResult {
    pub monthly_earnings: EarningsRange,
    pub annual_earnings: EarningsRange,
    pub eligible: bool,
}

pub fn calculate(input: &CreatorFundInput) -> CreatorFundResult {
    let monthly = US_BASE_RPM.for_views(input.monthly_views);

    CreatorFundResult {
        monthly_earnings: monthly.rounded(),
        annual_earnings: monthly.scale(MONTHS_PER_YEAR).rounded(),
        eligible: input.followers >= MIN_FOLLOWERS && input.monthly_views >= MIN_MONTHLY_VIEWS,
    }
}

pub struct CreatorFund;

impl Calculator for CreatorFund {
    type Input = CreatorFundInput;
    type Output = CreatorFundResult;

    const ID: &'static str = "creator_fund";
    const NAME: &'static str = "Creator Fund";
    const DESCRIPTION: &'static str = "Creator Fund payout range and eligibility from monthly views.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_fund_range() {
        let result = calculate(&CreatorFundInput {
            monthly_views: 1_000_000.0,
            followers: 25_000.0,
        });
        assert_eq!(result.monthly_earnings, EarningsRange::new(20.0, 40.0));
        assert_eq!(result.annual_earnings, EarningsRange::new(240.0, 480.0));
        assert!(result.eligible);
    }

    #[test]
    fn test_eligibility_thresholds() {
        let below_followers = calculate(&CreatorFundInput {
            monthly_views: 500_000.0,
            followers: 9_999.0,
        });
        assert!(!below_followers.eligible);

        let below_views = calculate(&CreatorFundInput {
            monthly_views: 99_999.0,
            followers: 50_000.0,
        });
        assert!(!below_views.eligible);
    }
}
