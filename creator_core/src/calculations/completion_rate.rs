//! # Completion Rate
//!
//! Average watch time as a share of video length. Values above 100% mean
//! viewers are rewatching, which is reported separately as `rewatch_signal`.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{percent_of, round2};
use crate::rating::{Bands, Tier};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

pub const COMPLETION_BANDS: Bands = Bands::new(70.0, 50.0, 30.0);

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("video_length_seconds", "Video length").positive(),
    FieldRule::number("average_watch_time_seconds", "Average watch time").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRateInput {
    pub video_length_seconds: f64,
    pub average_watch_time_seconds: f64,
}

impl CompletionRateInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRateResult {
    pub completion_rate: f64,
    /// Average watch time exceeds the video length
    pub rewatch_signal: bool,
    pub retention: Tier,
}

pub fn calculate(input: &CompletionRateInput) -> CompletionRateResult {
    let completion_rate = round2(percent_of(input.average_watch_time_seconds, input.video_length_seconds));

    CompletionRateResult {
        completion_rate,
        rewatch_signal: completion_rate > 100.0,
        retention: COMPLETION_BANDS.classify(completion_rate),
    }
}

pub struct CompletionRate;

impl Calculator for CompletionRate {
    type Input = CompletionRateInput;
    type Output = CompletionRateResult;

    const ID: &'static str = "completion_rate";
    const NAME: &'static str = "Completion Rate";
    const DESCRIPTION: &'static str = "Average watch time as a percentage of video length.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate() {
        let result = calculate(&CompletionRateInput {
            video_length_seconds: 30.0,
            average_watch_time_seconds: 21.0,
        });
        assert_eq!(result.completion_rate, 70.0);
        assert!(!result.rewatch_signal);
        assert_eq!(result.retention, Tier::Excellent);
    }

    #[test]
    fn test_rewatch_signal() {
        let result = calculate(&CompletionRateInput {
            video_length_seconds: 30.0,
            average_watch_time_seconds: 45.0,
        });
        assert_eq!(result.completion_rate, 150.0);
        assert!(result.rewatch_signal);
    }

    #[test]
    fn test_zero_length_rejected() {
        let report = CompletionRateInput {
            video_length_seconds: 0.0,
            average_watch_time_seconds: 10.0,
        }
        .validate();
        assert_eq!(report.error_for("video_length_seconds"), Some("Video length must be greater than 0"));
    }
}
