//! Creator Fund estimate adjusted for audience region, content niche and
//! engagement. The arithmetic lives in
//! [`RegionTable::regional_creator_fund`](crate::tables::RegionTable::regional_creator_fund).

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{EarningsRange, MONTHS_PER_YEAR};
use crate::tables::{Niche, RateTables, Region};
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("monthly_views", "Monthly views").min(0.0),
    FieldRule::choice("region", "Region", Region::CODES),
    FieldRule::choice("niche", "Niche", Niche::KEYS),
    FieldRule::number("engagement_multiplier", "Engagement multiplier").range(0.5, 2.0).step(0.1),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalCreatorFundInput {
    pub monthly_views: f64,
    pub region: Region,
    pub niche: Niche,
    /// 1.0 for typical engagement; higher for above-average accounts
    pub engagement_multiplier: f64,
}

impl RegionalCreatorFundInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalCreatorFundResult {
    pub monthly_earnings: EarningsRange,
    pub annual_earnings: EarningsRange,
    pub region_rpm: EarningsRange,
    pub niche_multiplier: f64,
}

pub fn calculate(input: &RegionalCreatorFundInput, tables: &RateTables) -> RegionalCreatorFundResult {
    let niche_multiplier = tables.niches.get(input.niche).rpm_multiplier;
    let monthly = tables.regions.regional_creator_fund(
        input.monthly_views,
        input.region,
        input.engagement_multiplier,
        niche_multiplier,
    );

    RegionalCreatorFundResult {
        monthly_earnings: monthly,
        annual_earnings: monthly.scale(MONTHS_PER_YEAR).rounded(),
        region_rpm: tables.regions.get(input.region).avg_rpm,
        niche_multiplier,
    }
}

pub struct RegionalCreatorFund;

impl Calculator for RegionalCreatorFund {
    type Input = RegionalCreatorFundInput;
    type Output = RegionalCreatorFundResult;

    const ID: &'static str = "regional_creator_fund";
    const NAME: &'static str = "Regional Creator Fund";
    const DESCRIPTION: &'static str = "Creator Fund range adjusted for region, niche and engagement.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, tables: &RateTables) -> Self::Output {
        calculate(input, tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_lifestyle_baseline() {
        let result = calculate(
            &RegionalCreatorFundInput {
                monthly_views: 1_000_000.0,
                region: Region::Us,
                niche: Niche::Lifestyle,
                engagement_multiplier: 1.0,
            },
            RateTables::builtin(),
        );
        assert_eq!(result.monthly_earnings, EarningsRange::new(20.0, 40.0));
        assert_eq!(result.annual_earnings, EarningsRange::new(240.0, 480.0));
        assert_eq!(result.niche_multiplier, 1.0);
    }

    #[test]
    fn test_finance_in_latam() {
        let result = calculate(
            &RegionalCreatorFundInput {
                monthly_views: 1_000_000.0,
                region: Region::Latam,
                niche: Niche::Finance,
                engagement_multiplier: 1.5,
            },
            RateTables::builtin(),
        );
        // 1000 * 0.006 * 1.5 * 2.0 = 18, 1000 * 0.012 * 3.0 = 36
        assert!((result.monthly_earnings.min - 18.0).abs() < 0.01);
        assert!((result.monthly_earnings.max - 36.0).abs() < 0.01);
    }

    #[test]
    fn test_choice_fields_validated() {
        let form = [
            ("monthly_views".to_string(), serde_json::json!(1000)),
            ("region".to_string(), serde_json::json!("atlantis")),
            ("niche".to_string(), serde_json::json!("tech")),
            ("engagement_multiplier".to_string(), serde_json::json!(3)),
        ]
        .into_iter()
        .collect();
        let report = crate::validation::validate_form(FIELDS, &form);
        assert!(report.errors.contains_key("region"));
        assert!(report.errors.contains_key("engagement_multiplier"));
        assert!(!report.errors.contains_key("niche"));
    }
}
