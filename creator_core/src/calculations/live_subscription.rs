//! LIVE subscription revenue after the platform's share.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{apply_percent, round2, MONTHS_PER_YEAR};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// Creator's share of subscription revenue, percent
pub const CREATOR_SHARE_PERCENT: f64 = 50.0;

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("subscribers", "Subscribers").min(0.0),
    FieldRule::number("monthly_price", "Monthly price").min(0.0).step(0.01),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSubscriptionInput {
    pub subscribers: f64,
    pub monthly_price: f64,
}

impl LiveSubscriptionInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSubscriptionResult {
    pub gross_monthly: f64,
    pub creator_monthly: f64,
    pub annual_earnings: f64,
}

pub fn calculate(input: &LiveSubscriptionInput) -> LiveSubscriptionResult {
    let gross = input.subscribers * input.monthly_price;
    let creator = apply_percent(gross, CREATOR_SHARE_PERCENT);

    LiveSubscriptionResult {
        gross_monthly: round2(gross),
        creator_monthly: round2(creator),
        annual_earnings: round2(creator * MONTHS_PER_YEAR),
    }
}

pub struct LiveSubscription;

impl Calculator for LiveSubscription {
    type Input = LiveSubscriptionInput;
    type Output = LiveSubscriptionResult;

    const ID: &'static str = "live_subscription";
    const NAME: &'static str = "LIVE Subscription";
    const DESCRIPTION: &'static str = "Monthly and annual creator income from LIVE subscribers.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_split() {
        let result = calculate(&LiveSubscriptionInput {
            subscribers: 200.0,
            monthly_price: 4.99,
        });
        assert_eq!(result.gross_monthly, 998.0);
        assert_eq!(result.creator_monthly, 499.0);
        assert_eq!(result.annual_earnings, 5_988.0);
    }

    #[test]
    fn test_no_subscribers() {
        let result = calculate(&LiveSubscriptionInput {
            subscribers: 0.0,
            monthly_price: 4.99,
        });
        assert_eq!(result.annual_earnings, 0.0);
    }
}
