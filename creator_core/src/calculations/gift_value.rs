//! # Gift Value
//!
//! What a gift of `coins` costs the viewer, how many diamonds the creator
//! receives, and how much of the spend the platform keeps.
//!
//! ```text
//! purchase_cost    = coins × $0.0106
//! creator_diamonds = coins × 0.5
//! creator_earnings = creator_diamonds × $0.005
//! platform_share   = purchase_cost − creator_earnings
//! ```

use serde::{Deserialize, Serialize};

use super::live_gifts::DIAMOND_VALUE_USD;
use super::Calculator;
use crate::equations::round2;
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// Viewer price per coin (USD)
pub const COIN_PRICE_USD: f64 = 0.0106;

/// Diamonds credited per coin gifted
pub const DIAMONDS_PER_COIN: f64 = 0.5;

pub const FIELDS: &[FieldRule] = &[FieldRule::number("coins", "Coins").min(0.0)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftValueInput {
    pub coins: f64,
}

impl GiftValueInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftValueResult {
    pub purchase_cost: f64,
    pub creator_diamonds: f64,
    pub creator_earnings: f64,
    pub platform_share: f64,
}

pub fn calculate(input: &GiftValueInput) -> GiftValueResult {
    let cost = input.coins * COIN_PRICE_USD;
    let diamonds = input.coins * DIAMONDS_PER_COIN;
    let earnings = diamonds * DIAMOND_VALUE_USD;

    GiftValueResult {
        purchase_cost: round2(cost),
        creator_diamonds: round2(diamonds),
        creator_earnings: round2(earnings),
        platform_share: round2(cost - earnings),
    }
}

pub struct GiftValue;

impl Calculator for GiftValue {
    type Input = GiftValueInput;
    type Output = GiftValueResult;

    const ID: &'static str = "gift_value";
    const NAME: &'static str = "Gift Value";
    const DESCRIPTION: &'static str = "Viewer cost, creator diamonds and payout for a gift in coins.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}
