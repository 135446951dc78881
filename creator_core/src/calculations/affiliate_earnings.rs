//! Affiliate link earnings from clicks, conversion rate and order value.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{apply_percent, round2, MONTHS_PER_YEAR};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("monthly_clicks", "Monthly clicks").min(0.0),
    FieldRule::number("conversion_rate", "Conversion rate").range(0.0, 100.0).step(0.1),
    FieldRule::number("average_order_value", "Average order value").min(0.0).step(0.01),
    FieldRule::number("commission_rate", "Commission rate").range(0.0, 100.0).step(0.1),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateEarningsInput {
    pub monthly_clicks: f64,
    /// Percent of clicks that buy
    pub conversion_rate: f64,
    pub average_order_value: f64,
    /// Percent of each order paid out
    pub commission_rate: f64,
}

impl AffiliateEarningsInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateEarningsResult {
    pub monthly_sales: f64,
    pub gross_sales: f64,
    pub monthly_commission: f64,
    pub annual_commission: f64,
}

pub fn calculate(input: &AffiliateEarningsInput) -> AffiliateEarningsResult {
    let sales = apply_percent(input.monthly_clicks, input.conversion_rate);
    let gross = sales * input.average_order_value;
    let commission = apply_percent(gross, input.commission_rate);

    AffiliateEarningsResult {
        monthly_sales: round2(sales),
        gross_sales: round2(gross),
        monthly_commission: round2(commission),
        annual_commission: round2(commission * MONTHS_PER_YEAR),
    }
}

pub struct AffiliateEarnings;

impl Calculator for AffiliateEarnings {
    type Input = AffiliateEarningsInput;
    type Output = AffiliateEarningsResult;

    const ID: &'static str = "affiliate_earnings";
    const NAME: &'static str = "Affiliate Earnings";
    const DESCRIPTION: &'static str = "Monthly affiliate commission from link clicks.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}
