//! # Rating Tiers
//!
//! Several calculators label a numeric output by comparing it against fixed
//! threshold bands. Bands are checked from the top down and the first band
//! whose lower bound the value reaches wins.
//!
//! ```rust
//! use creator_core::rating::{Bands, Tier};
//!
//! let bands = Bands::new(5.0, 2.0, 1.0);
//! assert_eq!(bands.classify(5.0), Tier::Excellent);
//! assert_eq!(bands.classify(2.0), Tier::Good);
//! assert_eq!(bands.classify(0.5), Tier::BelowAverage);
//! ```

use serde::{Deserialize, Serialize};

/// Categorical rating derived from a numeric metric.
///
/// Ordered from worst to best so tiers compare naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl Tier {
    /// All tiers, best first
    pub const ALL: [Tier; 4] = [Tier::Excellent, Tier::Good, Tier::Average, Tier::BelowAverage];

    /// Label as serialized ("below-average", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Average => "average",
            Tier::BelowAverage => "below-average",
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Average => "Average",
            Tier::BelowAverage => "Below average",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Inclusive lower bounds for the top three tiers.
///
/// Anything below `average` is [`Tier::BelowAverage`]. Thresholds must be
/// non-increasing (`excellent >= good >= average`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
}

impl Bands {
    pub const fn new(excellent: f64, good: f64, average: f64) -> Self {
        Self { excellent, good, average }
    }

    /// Map a value onto its tier.
    pub fn classify(&self, value: f64) -> Tier {
        if value >= self.excellent {
            Tier::Excellent
        } else if value >= self.good {
            Tier::Good
        } else if value >= self.average {
            Tier::Average
        } else {
            Tier::BelowAverage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_inclusive() {
        let bands = Bands::new(0.04, 0.03, 0.02);
        assert_eq!(bands.classify(0.04), Tier::Excellent);
        assert_eq!(bands.classify(0.03), Tier::Good);
        assert_eq!(bands.classify(0.0299), Tier::Average);
        assert_eq!(bands.classify(0.0199), Tier::BelowAverage);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let bands = Bands::new(5.0, 2.0, 1.0);
        let mut previous = Tier::BelowAverage;
        for step in 0..=800 {
            let tier = bands.classify(step as f64 * 0.01);
            assert!(tier >= previous, "tier dropped at step {step}");
            previous = tier;
        }
        assert_eq!(previous, Tier::Excellent);
    }

    #[test]
    fn test_nan_is_below_average() {
        assert_eq!(Bands::new(5.0, 2.0, 1.0).classify(f64::NAN), Tier::BelowAverage);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(serde_json::to_string(&Tier::BelowAverage).unwrap(), "\"below-average\"");
        for tier in Tier::ALL {
            assert_eq!(serde_json::to_string(&tier).unwrap(), format!("\"{}\"", tier.label()));
        }
    }
}
