//! # Multi-Platform Earnings
//!
//! Compares ad revenue for the same monthly views across TikTok, YouTube and
//! Instagram, using a fixed RPM range per platform.
//!
//! ```text
//! platform  = views / 1000 × platform RPM range
//! total     = Σ platform ranges
//! best      = highest midpoint (ties keep TikTok, YouTube, Instagram order)
//! rpm_gap   = best platform average RPM ÷ lowest average RPM
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::equations::{round2, safe_div, EarningsRange};
use crate::tables::RateTables;
use crate::validation::{validate_input, FieldRule, ValidationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Youtube,
    Instagram,
}

impl Platform {
    /// Comparison order; earlier platforms win ties
    pub const ALL: [Platform; 3] = [Platform::Tiktok, Platform::Youtube, Platform::Instagram];

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Instagram => "Instagram",
        }
    }

    /// Ad revenue per 1,000 views (USD)
    pub fn rpm(&self) -> EarningsRange {
        match self {
            Platform::Tiktok => EarningsRange::new(0.40, 1.00),
            Platform::Youtube => EarningsRange::new(2.00, 5.00),
            Platform::Instagram => EarningsRange::new(0.10, 0.50),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

pub const FIELDS: &[FieldRule] = &[
    FieldRule::number("tiktok_views", "TikTok monthly views").min(0.0),
    FieldRule::number("youtube_views", "YouTube monthly views").min(0.0),
    FieldRule::number("instagram_views", "Instagram monthly views").min(0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPlatformInput {
    pub tiktok_views: f64,
    pub youtube_views: f64,
    pub instagram_views: f64,
}

impl MultiPlatformInput {
    pub fn validate(&self) -> ValidationReport {
        validate_input(FIELDS, self)
    }

    pub fn views(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Tiktok => self.tiktok_views,
            Platform::Youtube => self.youtube_views,
            Platform::Instagram => self.instagram_views,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformEarnings {
    pub platform: Platform,
    pub views: f64,
    pub monthly_earnings: EarningsRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPlatformResult {
    pub platforms: Vec<PlatformEarnings>,
    pub total_monthly: EarningsRange,
    pub best_platform: Platform,
    /// Best platform's average RPM over the lowest average RPM
    pub rpm_gap: f64,
}

impl MultiPlatformResult {
    pub fn earnings_for(&self, platform: Platform) -> Option<&PlatformEarnings> {
        self.platforms.iter().find(|p| p.platform == platform)
    }
}

pub fn calculate(input: &MultiPlatformInput) -> MultiPlatformResult {
    let mut platforms = Vec::with_capacity(Platform::ALL.len());
    let mut total = EarningsRange::default();
    let mut best = (Platform::Tiktok, f64::NEG_INFINITY);

    for platform in Platform::ALL {
        let views = input.views(platform);
        let earnings = platform.rpm().for_views(views);
        total = total.add(&earnings);
        let monthly_earnings = earnings.rounded();
        if monthly_earnings.midpoint() > best.1 {
            best = (platform, monthly_earnings.midpoint());
        }
        platforms.push(PlatformEarnings {
            platform,
            views,
            monthly_earnings,
        });
    }

    let lowest_rpm = Platform::ALL
        .iter()
        .map(|p| p.rpm().midpoint())
        .fold(f64::INFINITY, f64::min);

    MultiPlatformResult {
        platforms,
        total_monthly: total.rounded(),
        best_platform: best.0,
        rpm_gap: round2(safe_div(best.0.rpm().midpoint(), lowest_rpm)),
    }
}

pub struct MultiPlatform;

impl Calculator for MultiPlatform {
    type Input = MultiPlatformInput;
    type Output = MultiPlatformResult;

    const ID: &'static str = "multi_platform";
    const NAME: &'static str = "Multi-Platform Earnings";
    const DESCRIPTION: &'static str = "Ad revenue for TikTok, YouTube and Instagram views side by side.";
    const FIELDS: &'static [FieldRule] = FIELDS;

    fn run(input: &Self::Input, _tables: &RateTables) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(tiktok: f64, youtube: f64, instagram: f64) -> MultiPlatformInput {
        MultiPlatformInput {
            tiktok_views: tiktok,
            youtube_views: youtube,
            instagram_views: instagram,
        }
    }

    #[test]
    fn test_platform_ranges_and_total() {
        let result = calculate(&input(1_000_000.0, 100_000.0, 500_000.0));
        let tiktok = result.earnings_for(Platform::Tiktok).unwrap();
        assert_eq!(tiktok.monthly_earnings, EarningsRange::new(400.0, 1_000.0));
        let youtube = result.earnings_for(Platform::Youtube).unwrap();
        assert_eq!(youtube.monthly_earnings, EarningsRange::new(200.0, 500.0));
        let instagram = result.earnings_for(Platform::Instagram).unwrap();
        assert_eq!(instagram.monthly_earnings, EarningsRange::new(50.0, 250.0));
        assert_eq!(result.total_monthly, EarningsRange::new(650.0, 1_750.0));
        assert_eq!(result.best_platform, Platform::Tiktok);
        // 0.70 / 0.30
        assert_eq!(result.rpm_gap, 2.33);
    }

    #[test]
    fn test_youtube_wins_on_equal_views() {
        let result = calculate(&input(100_000.0, 100_000.0, 100_000.0));
        assert_eq!(result.best_platform, Platform::Youtube);
        // 3.50 / 0.30
        assert_eq!(result.rpm_gap, 11.67);
    }

    #[test]
    fn test_tie_keeps_earlier_platform() {
        // TikTok midpoint 0.70/k, Instagram 0.30/k: 300k vs 700k views tie at 210
        let result = calculate(&input(300_000.0, 0.0, 700_000.0));
        assert_eq!(result.best_platform, Platform::Tiktok);
    }

    #[test]
    fn test_negative_views_rejected() {
        let report = input(1_000.0, -1.0, f64::NAN).validate();
        assert!(!report.valid);
        assert_eq!(report.error_for("youtube_views"), Some("YouTube monthly views must be at least 0"));
        assert_eq!(report.error_for("instagram_views"), Some("Instagram monthly views is required"));
        assert!(report.error_for("tiktok_views").is_none());
    }

    #[test]
    fn test_zero_views() {
        let result = calculate(&input(0.0, 0.0, 0.0));
        assert_eq!(result.best_platform, Platform::Tiktok);
        assert_eq!(result.total_monthly, EarningsRange::new(0.0, 0.0));
        assert_eq!(result.platforms.len(), 3);
    }
}
