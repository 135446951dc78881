//! LIVE gift earnings from diamonds received per stream.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{round2, MONTHS_PER_YEAR};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

/// Creator payout per diamond (USD)
pub const DIAMOND_VALUE_USD: f64 = 0.005;

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("diamonds_per_stream", "Diamonds per stream").min(0.0),
    FieldRule::number("streams_per_month", "Streams per month").range(0.0, 90.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveGiftsInput {
    pub diamonds_per_stream: f64,
    pub streams_per_month: f64,
}

impl LiveGiftsInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveGiftsResult {
    pub earnings_per_stream: f64,
    pub monthly_earnings: f64,
    pub annual_earnings: f64,
}

pub fn calculate(input: &LiveGiftsInput) -> LiveGiftsResult {
    let per_stream = input.diamonds_per_stream * DIAMOND_VALUE_USD;
    let monthly = per_stream * input.streams_per_month;

    LiveGiftsResult {
        earnings_per_stream: round2(per_stream),
        monthly_earnings: round2(monthly),
        annual_earnings: round2(monthly * MONTHS_PER_YEAR),
    }
}

pub struct LiveGifts;

impl Calculator for LiveGifts {
    type Input = LiveGiftsInput;
    type Output = LiveGiftsResult;

    const ID: &'static str = "live_gifts";
    const NAME: &'static str = "LIVE Gifts";
    const DESCRIPTION: &'static str = "Earnings from LIVE gift diamonds.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_gifts() {
        let result = calculate(&LiveGiftsInput {
            diamonds_per_stream: 10_000.0,
            streams_per_month: 12.0,
        });
        assert_eq!(result.earnings_per_stream, 50.0);
        assert_eq!(result.monthly_earnings, 600.0);
        assert_eq!(result.annual_earnings, 7_200.0);
    }
}
