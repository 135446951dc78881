//! Regional earning multipliers.
//!
//! Rates are expressed relative to the US baseline (multiplier 1.0). Average
//! RPM bands are derived from the US Creator Fund band and average CPM bands
//! from the US brand CPM band.

use serde::{Deserialize, Serialize};

use crate::equations::{per_thousand, round2, EarningsRange};
use crate::errors::{CalcError, CalcResult};

/// US Creator Fund payout per 1,000 views
pub const US_BASE_RPM: EarningsRange = EarningsRange::new(0.02, 0.04);

/// US brand campaign cost per 1,000 views
pub const US_BASE_CPM: EarningsRange = EarningsRange::new(4.0, 10.0);

/// Audience regions with distinct payout levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Uk,
    Eu,
    Latam,
    Asia,
    Mena,
    Africa,
    Ca,
    Au,
}

impl Region {
    /// All regions, in table order
    pub const ALL: [Region; 9] = [
        Region::Us,
        Region::Uk,
        Region::Eu,
        Region::Latam,
        Region::Asia,
        Region::Mena,
        Region::Africa,
        Region::Ca,
        Region::Au,
    ];

    /// Region codes, in the same order as [`Region::ALL`]
    pub const CODES: &'static [&'static str] = &["us", "uk", "eu", "latam", "asia", "mena", "africa", "ca", "au"];

    pub fn code(&self) -> &'static str {
        Self::CODES[self.index()]
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a region code (case-insensitive)
    pub fn from_code(code: &str) -> CalcResult<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.code() == code)
            .ok_or_else(|| CalcError::lookup_not_found("region", code))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which regional multiplier to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierKind {
    /// Per-view platform payouts
    Rpm,
    /// Sponsorship and brand deal pricing
    BrandDeal,
}

/// Earning profile for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Display name ("United Kingdom")
    pub name: String,
    /// Platform payout multiplier relative to the US
    pub rpm_multiplier: f64,
    /// Brand deal pricing multiplier relative to the US
    pub brand_deal_multiplier: f64,
    /// Typical Creator Fund RPM band for the region
    pub avg_rpm: EarningsRange,
    /// Typical brand CPM band for the region
    pub avg_cpm: EarningsRange,
}

impl RegionProfile {
    /// Profile derived from the US baselines
    pub fn from_multipliers(name: impl Into<String>, rpm_multiplier: f64, brand_deal_multiplier: f64) -> Self {
        RegionProfile {
            name: name.into(),
            rpm_multiplier,
            brand_deal_multiplier,
            avg_rpm: US_BASE_RPM.scale(rpm_multiplier),
            avg_cpm: US_BASE_CPM.scale(brand_deal_multiplier),
        }
    }

    pub fn multiplier(&self, kind: MultiplierKind) -> f64 {
        match kind {
            MultiplierKind::Rpm => self.rpm_multiplier,
            MultiplierKind::BrandDeal => self.brand_deal_multiplier,
        }
    }
}

/// (name, rpm multiplier, brand deal multiplier), in [`Region::ALL`] order
const BUILTIN_REGIONS: [(&str, f64, f64); 9] = [
    ("United States", 1.0, 1.0),
    ("United Kingdom", 0.85, 0.9),
    ("European Union", 0.7, 0.75),
    ("Latin America", 0.3, 0.35),
    ("Asia", 0.4, 0.45),
    ("Middle East & North Africa", 0.5, 0.55),
    ("Sub-Saharan Africa", 0.2, 0.25),
    ("Canada", 0.85, 0.85),
    ("Australia", 0.8, 0.85),
];

/// Region lookup table, one profile per [`Region`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTable {
    profiles: Vec<RegionProfile>,
}

impl Default for RegionTable {
    fn default() -> Self {
        RegionTable {
            profiles: BUILTIN_REGIONS
                .iter()
                .map(|(name, rpm, brand)| RegionProfile::from_multipliers(*name, *rpm, *brand))
                .collect(),
        }
    }
}

impl RegionTable {
    /// Profile for a region
    pub fn get(&self, region: Region) -> &RegionProfile {
        &self.profiles[region.index()]
    }

    /// Profile for a region code
    pub fn lookup(&self, code: &str) -> CalcResult<&RegionProfile> {
        Region::from_code(code).map(|region| self.get(region))
    }

    pub(crate) fn get_mut(&mut self, region: Region) -> &mut RegionProfile {
        &mut self.profiles[region.index()]
    }

    /// Iterate `(region, profile)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Region, &RegionProfile)> {
        Region::ALL.iter().copied().zip(self.profiles.iter())
    }

    /// Scale a US-based value by the region's multiplier.
    pub fn apply_regional_multiplier(&self, base: f64, region: Region, kind: MultiplierKind) -> f64 {
        base * self.get(region).multiplier(kind)
    }

    /// Creator Fund estimate for a region.
    ///
    /// `views / 1000 * avg_rpm * engagement_multiplier * niche_multiplier`,
    /// rounded to cents. Non-decreasing in `monthly_views` for non-negative
    /// multipliers.
    pub fn regional_creator_fund(
        &self,
        monthly_views: f64,
        region: Region,
        engagement_multiplier: f64,
        niche_multiplier: f64,
    ) -> EarningsRange {
        let rpm = self.get(region).avg_rpm;
        let factor = engagement_multiplier * niche_multiplier;
        EarningsRange::new(
            round2(per_thousand(monthly_views, rpm.min) * factor),
            round2(per_thousand(monthly_views, rpm.max) * factor),
        )
    }

    /// Check table invariants: multipliers in (0, 1] and ordered bands.
    pub fn check(&self) -> CalcResult<()> {
        for (region, profile) in self.iter() {
            for (field, value) in [
                ("rpm_multiplier", profile.rpm_multiplier),
                ("brand_deal_multiplier", profile.brand_deal_multiplier),
            ] {
                if !(value > 0.0 && value <= 1.0) {
                    return Err(CalcError::config(format!(
                        "region '{region}' {field} must be in (0, 1], got {value}"
                    )));
                }
            }
            if !profile.avg_rpm.is_ordered() || !profile.avg_cpm.is_ordered() {
                return Err(CalcError::config(format!(
                    "region '{region}' rate bands must have min <= max"
                )));
            }
        }
        Ok(())
    }
}
