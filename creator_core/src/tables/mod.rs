//! # Rate Tables
//!
//! Constant lookup data shared by the calculators that price content by
//! audience region or content niche. Tables are immutable once built and are
//! passed into formulas by reference, so callers can substitute their own
//! rates without touching global state.
//!
//! ## Rates file
//!
//! A TOML file can override any subset of the built-in values:
//!
//! ```toml
//! [regions.uk]
//! rpm_multiplier = 0.8
//! avg_rpm = { min = 0.015, max = 0.03 }
//!
//! [niches.finance]
//! brand_deal_multiplier = 2.0
//! ```
//!
//! ## Example
//!
//! ```rust
//! use creator_core::tables::{MultiplierKind, RateTables, Region};
//!
//! let tables = RateTables::builtin();
//! let uk = tables.regions.apply_regional_multiplier(1000.0, Region::Uk, MultiplierKind::BrandDeal);
//! assert!((uk - 900.0).abs() < 1e-9);
//!
//! let custom = RateTables::from_toml_str("[regions.uk]\nbrand_deal_multiplier = 0.5\n").unwrap();
//! assert_eq!(custom.regions.get(Region::Uk).brand_deal_multiplier, 0.5);
//! ```

pub mod niches;
pub mod regions;

pub use niches::{Niche, NicheProfile, NicheTable};
pub use regions::{MultiplierKind, Region, RegionProfile, RegionTable, US_BASE_CPM, US_BASE_RPM};

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::EarningsRange;
use crate::errors::{CalcError, CalcResult};

static BUILTIN: Lazy<RateTables> = Lazy::new(RateTables::default);

/// All constant tables used by the calculators.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateTables {
    pub regions: RegionTable,
    pub niches: NicheTable,
}

/// Partial region entry in a rates file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionOverride {
    name: Option<String>,
    rpm_multiplier: Option<f64>,
    brand_deal_multiplier: Option<f64>,
    avg_rpm: Option<EarningsRange>,
    avg_cpm: Option<EarningsRange>,
}

/// Partial niche entry in a rates file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NicheOverride {
    rpm_multiplier: Option<f64>,
    brand_deal_multiplier: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RatesFile {
    #[serde(default)]
    regions: BTreeMap<String, RegionOverride>,
    #[serde(default)]
    niches: BTreeMap<String, NicheOverride>,
}

impl RateTables {
    /// Process-wide built-in tables
    pub fn builtin() -> &'static RateTables {
        &BUILTIN
    }

    /// Built-in tables with overrides from a TOML rates file applied.
    ///
    /// Changing a region's multiplier rescales its average RPM/CPM bands from
    /// the US baseline unless the file also sets the band explicitly.
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let file: RatesFile = toml::from_str(source).map_err(|err| CalcError::config(err.to_string()))?;
        let mut tables = RateTables::default();

        for (code, entry) in file.regions {
            let region = Region::from_code(&code)?;
            let profile = tables.regions.get_mut(region);
            if let Some(name) = entry.name {
                profile.name = name;
            }
            if let Some(multiplier) = entry.rpm_multiplier {
                profile.rpm_multiplier = multiplier;
                profile.avg_rpm = US_BASE_RPM.scale(multiplier);
            }
            if let Some(multiplier) = entry.brand_deal_multiplier {
                profile.brand_deal_multiplier = multiplier;
                profile.avg_cpm = US_BASE_CPM.scale(multiplier);
            }
            if let Some(band) = entry.avg_rpm {
                profile.avg_rpm = band;
            }
            if let Some(band) = entry.avg_cpm {
                profile.avg_cpm = band;
            }
            debug!(region = %region, "applied region override");
        }

        for (key, entry) in file.niches {
            let niche = Niche::from_key(&key)?;
            let profile = tables.niches.get_mut(niche);
            if let Some(multiplier) = entry.rpm_multiplier {
                profile.rpm_multiplier = multiplier;
            }
            if let Some(multiplier) = entry.brand_deal_multiplier {
                profile.brand_deal_multiplier = multiplier;
            }
            debug!(niche = niche.key(), "applied niche override");
        }

        tables.regions.check()?;
        tables.niches.check()?;
        Ok(tables)
    }
}
