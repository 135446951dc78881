//! Content niches: display names for form options plus payout and
//! brand-deal multipliers relative to a general lifestyle account.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Content niche of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Niche {
    Comedy,
    Dance,
    Beauty,
    Fashion,
    Fitness,
    Food,
    Gaming,
    Tech,
    Finance,
    Education,
    Travel,
    Lifestyle,
    Pets,
    Music,
    Diy,
}

impl Niche {
    /// All niches, in table order
    pub const ALL: [Niche; 15] = [
        Niche::Comedy,
        Niche::Dance,
        Niche::Beauty,
        Niche::Fashion,
        Niche::Fitness,
        Niche::Food,
        Niche::Gaming,
        Niche::Tech,
        Niche::Finance,
        Niche::Education,
        Niche::Travel,
        Niche::Lifestyle,
        Niche::Pets,
        Niche::Music,
        Niche::Diy,
    ];

    /// Niche keys, in the same order as [`Niche::ALL`]
    pub const KEYS: &'static [&'static str] = &[
        "comedy",
        "dance",
        "beauty",
        "fashion",
        "fitness",
        "food",
        "gaming",
        "tech",
        "finance",
        "education",
        "travel",
        "lifestyle",
        "pets",
        "music",
        "diy",
    ];

    pub fn key(&self) -> &'static str {
        Self::KEYS[self.index()]
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Human-readable label for form options
    pub fn display_name(&self) -> &'static str {
        match self {
            Niche::Comedy => "Comedy & Entertainment",
            Niche::Dance => "Dance",
            Niche::Beauty => "Beauty & Skincare",
            Niche::Fashion => "Fashion",
            Niche::Fitness => "Fitness & Health",
            Niche::Food => "Food & Cooking",
            Niche::Gaming => "Gaming",
            Niche::Tech => "Tech & Gadgets",
            Niche::Finance => "Personal Finance",
            Niche::Education => "Education",
            Niche::Travel => "Travel",
            Niche::Lifestyle => "Lifestyle",
            Niche::Pets => "Pets & Animals",
            Niche::Music => "Music",
            Niche::Diy => "DIY & Crafts",
        }
    }

    /// Parse a niche key (case-insensitive, accepts spaces or dashes)
    pub fn from_key(key: &str) -> CalcResult<Self> {
        let key = key.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|niche| niche.key() == key)
            .ok_or_else(|| CalcError::lookup_not_found("niche", key))
    }
}

impl std::fmt::Display for Niche {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Multipliers for one niche.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NicheProfile {
    /// Platform payout multiplier (advertiser demand)
    pub rpm_multiplier: f64,
    /// Sponsorship pricing multiplier
    pub brand_deal_multiplier: f64,
}

/// (rpm multiplier, brand deal multiplier), in [`Niche::ALL`] order
const BUILTIN_NICHES: [(f64, f64); 15] = [
    (0.9, 0.9),   // comedy
    (0.8, 0.85),  // dance
    (1.3, 1.4),   // beauty
    (1.2, 1.3),   // fashion
    (1.2, 1.25),  // fitness
    (1.0, 1.1),   // food
    (1.1, 1.0),   // gaming
    (1.6, 1.5),   // tech
    (2.0, 1.8),   // finance
    (1.4, 1.2),   // education
    (1.1, 1.2),   // travel
    (1.0, 1.0),   // lifestyle
    (0.9, 1.0),   // pets
    (0.8, 0.9),   // music
    (1.0, 1.05),  // diy
];

/// Niche lookup table, one profile per [`Niche`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NicheTable {
    profiles: Vec<NicheProfile>,
}

impl Default for NicheTable {
    fn default() -> Self {
        NicheTable {
            profiles: BUILTIN_NICHES
                .iter()
                .map(|(rpm, brand)| NicheProfile {
                    rpm_multiplier: *rpm,
                    brand_deal_multiplier: *brand,
                })
                .collect(),
        }
    }
}

impl NicheTable {
    pub fn get(&self, niche: Niche) -> &NicheProfile {
        &self.profiles[niche.index()]
    }

    pub(crate) fn get_mut(&mut self, niche: Niche) -> &mut NicheProfile {
        &mut self.profiles[niche.index()]
    }

    /// `(key, display name)` pairs for form select options
    pub fn options(&self) -> Vec<(&'static str, &'static str)> {
        Niche::ALL.iter().map(|n| (n.key(), n.display_name())).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Niche, &NicheProfile)> {
        Niche::ALL.iter().copied().zip(self.profiles.iter())
    }

    /// Multipliers must be positive and finite.
    pub fn check(&self) -> CalcResult<()> {
        for (niche, profile) in self.iter() {
            for (field, value) in [
                ("rpm_multiplier", profile.rpm_multiplier),
                ("brand_deal_multiplier", profile.brand_deal_multiplier),
            ] {
                if !(value.is_finite() && value > 0.0) {
                    return Err(CalcError::config(format!(
                        "niche '{}' {field} must be positive, got {value}",
                        niche.key()
                    )));
                }
            }
        }
        Ok(())
    }
}
