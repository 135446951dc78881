//! # RPM Calculation
//!
//! Revenue per 1,000 views from a payout and the views that earned it, with a
//! benchmark against typical Creator Fund payouts.
//!
//! | Benchmark     | RPM (USD)   |
//! |---------------|-------------|
//! | excellent     | ≥ 0.04      |
//! | good          | 0.03 - 0.04 |
//! | average       | 0.02 - 0.03 |
//! | below-average | < 0.02      |

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{rate_per_thousand, round2, round_to};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const RPM_BANDS: Bands = Bands::new(0.04, 0.03, 0.02);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("total_views", "Total views").min(1.0),
    FieldRule::number("total_earnings", "Total earnings").min(0.0).step(0.01),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpmInput {
    pub total_views: f64,
    /// Payout received for those views (USD)
    pub total_earnings: f64,
}

impl RpmInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpmResult {
    /// Revenue per 1,000 views (USD, 4 decimals)
    pub rpm: f64,
    /// What a million views pay at this RPM (USD)
    pub earnings_per_million: f64,
    pub benchmark: Tier,
}

pub fn calculate(input: &RpmInput) -> RpmResult {
    let raw = rate_per_thousand(input.total_earnings, input.total_views);
    let rpm = round_to(raw, 4);

    RpmResult {
        rpm,
        earnings_per_million: round2(raw * 1000.0),
        benchmark: RPM_BANDS.classify(rpm),
    }
}

pub struct Rpm;

impl Calculator for Rpm {
    type Input = RpmInput;
    type Output = RpmResult;

    const ID: &'static str = "rpm";
    const NAME: &'static str = "RPM";
    const DESCRIPTION: &'static str = "Revenue per 1,000 views, benchmarked against typical payouts.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpm_good_band() {
        let result = calculate(&RpmInput {
            total_views: 100_000.0,
            total_earnings: 3.0,
        });
        assert_eq!(result.rpm, 0.03);
        assert_eq!(result.benchmark, Tier::Good);
        assert_eq!(result.earnings_per_million, 30.0);
    }

    #[test]
    fn test_rpm_benchmarks() {
        let rpm_for = |earnings: f64| {
            calculate(&RpmInput {
                total_views: 100_000.0,
                total_earnings: earnings,
            })
            .benchmark
        };
        assert_eq!(rpm_for(5.0), Tier::Excellent);
        assert_eq!(rpm_for(2.5), Tier::Average);
        assert_eq!(rpm_for(1.0), Tier::BelowAverage);
    }

    #[test]
    fn test_benchmark_monotonic_in_earnings() {
        let mut previous = Tier::BelowAverage;
        for cents in 0..=600 {
            let tier = calculate(&RpmInput {
                total_views: 100_000.0,
                total_earnings: cents as f64 / 100.0,
            })
            .benchmark;
            assert!(tier >= previous);
            previous = tier;
        }
    }

    #[test]
    fn test_zero_views_rejected() {
        let report = RpmInput {
            total_views: 0.0,
            total_earnings: 3.0,
        }
        .validate();
        assert_eq!(report.error_for("total_views"), Some("Total views must be at least 1"));
    }

    #[test]
    fn test_huge_earnings_stay_finite() {
        let result = calculate(&RpmInput {
            total_views: 1.0,
            total_earnings: 1e302,
        });
        assert!(result.rpm.is_finite());
        assert!(result.earnings_per_million.is_finite());
        assert_eq!(result.benchmark, Tier::Excellent);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["rpm"].is_number());
        assert!(json["earnings_per_million"].is_number());
    }
}
