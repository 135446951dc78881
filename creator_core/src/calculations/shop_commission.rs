//! # Shop Commission
//!
//! Affiliate commission on products sold through an in-app shop.
//!
//! ```text
//! commission_per_sale = product_price × commission_rate / 100
//! monthly_commission  = commission_per_sale × monthly_sales
//! annual_projection   = monthly_commission × 12
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{apply_percent, round2, MONTHS_PER_YEAR};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("product_price", "Product price").min(0.0).step(0.01),
    FieldRule::number("commission_rate", "Commission rate").range(0.0, 100.0).step(0.1),
    FieldRule::number("monthly_sales", "Monthly sales").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCommissionInput {
    /// Price per unit (USD)
    pub product_price: f64,
    /// Commission percentage (0-100)
    pub commission_rate: f64,
    /// Units sold per month
    pub monthly_sales: f64,
}

impl ShopCommissionInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCommissionResult {
    pub commission_per_sale: f64,
    pub monthly_commission: f64,
    pub annual_projection: f64,
}

pub fn calculate(input: &ShopCommissionInput) -> ShopCommissionResult {
    let per_sale = apply_percent(input.product_price, input.commission_rate);
    let monthly = per_sale * input.monthly_sales;

    ShopCommissionResult {
        commission_per_sale: round2(per_sale),
        monthly_commission: round2(monthly),
        annual_projection: round2(monthly * MONTHS_PER_YEAR),
    }
}

pub struct ShopCommission;

impl Calculator for ShopCommission {
    type Input = ShopCommissionInput;
    type Output = ShopCommissionResult;

    const ID: &'static str = "shop_commission";
    const NAME: &'static str = "Shop Commission";
    const DESCRIPTION: &'static str = "Commission per sale, per month and per year for shop products.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_commission() {
        let result = calculate(&ShopCommissionInput {
            product_price: 50.0,
            commission_rate: 5.0,
            monthly_sales: 20.0,
        });
        assert_eq!(result.commission_per_sale, 2.5);
        assert_eq!(result.monthly_commission, 50.0);
        assert_eq!(result.annual_projection, 600.0);
    }

    #[test]
    fn test_rate_above_100_rejected() {
        let report = ShopCommissionInput {
            product_price: 50.0,
            commission_rate: 120.0,
            monthly_sales: 20.0,
        }
        .validate();
        assert_eq!(report.error_for("commission_rate"), Some("Commission rate must be at most 100"));
    }
}
