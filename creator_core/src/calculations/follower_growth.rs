//! Time to reach a follower goal at a steady daily gain.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2, round_to, safe_div, DAYS_PER_MONTH};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("current_followers", "Current followers").min(1.0),
    FieldRule::number("target_followers", "Target followers").min(0.0),
    FieldRule::number("daily_new_followers", "Daily new followers").positive(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerGrowthInput {
    pub current_followers: f64,
    pub target_followers: f64,
    pub daily_new_followers: f64,
}

impl FollowerGrowthInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerGrowthResult {
    /// Zero when the target is already reached
    pub followers_needed: f64,
    /// Whole days, rounded up
    pub days_to_target: f64,
    pub months_to_target: f64,
    /// Daily gain as a percentage of the current audience
    pub daily_growth_rate: f64,
    pub target_reached: bool,
}

pub fn calculate(input: &FollowerGrowthInput) -> FollowerGrowthResult {
    let needed = (input.target_followers - input.current_followers).max(0.0);
    let days = safe_div(needed, input.daily_new_followers).ceil();

    FollowerGrowthResult {
        followers_needed: needed,
        days_to_target: days,
        months_to_target: round_to(days / DAYS_PER_MONTH, 1),
        daily_growth_rate: round2(percent_of(input.daily_new_followers, input.current_followers)),
        target_reached: needed == 0.0,
    }
}

pub struct FollowerGrowth;

impl Calculator for FollowerGrowth {
    type Input = FollowerGrowthInput;
    type Output = FollowerGrowthResult;

    const ID: &'static str = "follower_growth";
    const NAME: &'static str = "Follower Growth";
    const DESCRIPTION: &'static str = "Days and months to a follower goal at your current daily gain.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_to_target() {
        let result = calculate(&FollowerGrowthInput {
            current_followers: 10_000.0,
            target_followers: 50_000.0,
            daily_new_followers: 200.0,
        });
        assert_eq!(result.followers_needed, 40_000.0);
        assert_eq!(result.days_to_target, 200.0);
        assert_eq!(result.months_to_target, 6.7);
        assert_eq!(result.daily_growth_rate, 2.0);
        assert!(!result.target_reached);
    }

    #[test]
    fn test_partial_days_round_up() {
        let result = calculate(&FollowerGrowthInput {
            current_followers: 1_000.0,
            target_followers: 1_101.0,
            daily_new_followers: 50.0,
        });
        assert_eq!(result.days_to_target, 3.0);
    }

    #[test]
    fn test_target_already_reached() {
        let result = calculate(&FollowerGrowthInput {
            current_followers: 60_000.0,
            target_followers: 50_000.0,
            daily_new_followers: 10.0,
        });
        assert_eq!(result.followers_needed, 0.0);
        assert_eq!(result.days_to_target, 0.0);
        assert!(result.target_reached);
    }

    #[test]
    fn test_zero_daily_gain_rejected() {
        let report = FollowerGrowthInput {
            current_followers: 100.0,
            target_followers: 1_000.0,
            daily_new_followers: 0.0,
        }
        .validate();
        assert_eq!(
            report.error_for("daily_new_followers"),
            Some("Daily new followers must be greater than 0")
        );
    }
}
