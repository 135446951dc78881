//! # Calculators
//!
//! Every calculator module follows the same pattern:
//!
//! - `FIELDS` - declared form fields and their bounds
//! - `*Input` - input record (JSON-serializable), with `validate()`
//! - `*Result` - numeric result record (JSON-serializable)
//! - `calculate(input) -> *Result` - pure formula; never validates
//!
//! Calculators that price by region or niche take the [`RateTables`] as an
//! extra argument. Prose interpretations live in [`crate::interpretation`].
//!
//! ## Running by name
//!
//! ```rust
//! use creator_core::calculations::CalculatorId;
//! use creator_core::tables::RateTables;
//! use creator_core::validation::FormValues;
//! use serde_json::json;
//!
//! let mut form = FormValues::new();
//! form.insert("views".into(), json!("50000"));
//! form.insert("saves".into(), json!(1000));
//!
//! let id = CalculatorId::from_slug("save_rate").unwrap();
//! let evaluation = id.evaluate(&form, RateTables::builtin()).unwrap();
//! assert_eq!(evaluation.result["save_rate"], json!(2.0));
//! assert_eq!(evaluation.result["content_value_rating"], json!("good"));
//! ```

pub mod ad_revenue;
pub mod affiliate_earnings;
pub mod brand_deal;
pub mod comment_rate;
pub mod completion_rate;
pub mod content_roi;
pub mod cpm;
pub mod creator_fund;
pub mod creator_rewards;
pub mod engagement_rate;
pub mod follower_conversion;
pub mod follower_growth;
pub mod gift_value;
pub mod growth_rate;
pub mod hashtag_engagement;
pub mod like_ratio;
pub mod live_gifts;
pub mod live_subscription;
pub mod multi_platform;
pub mod regional_creator_fund;
pub mod rpm;
pub mod save_rate;
pub mod share_ratio;
pub mod shop_commission;
pub mod sponsorship_rate;
pub mod view_ratio;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::interpretation::Interpret;
use crate::tables::RateTables;
use crate::validation::{parse_form, FieldKind, FieldRule, FormValues};

// Re-export commonly used types
pub use ad_revenue::{AdRevenueInput, AdRevenueResult};
pub use follower_conversion::{FollowerConversionInput, FollowerConversionResult};
pub use multi_platform::{MultiPlatformInput, MultiPlatformResult, Platform};
pub use rpm::{RpmInput, RpmResult};
pub use save_rate::{SaveRateInput, SaveRateResult};
pub use share_ratio::{ShareRatioInput, ShareRatioResult};
pub use shop_commission::{ShopCommissionInput, ShopCommissionResult};

/// Common shape of every calculator, used for dispatch by name.
pub trait Calculator {
    type Input: Serialize + DeserializeOwned;
    type Output: Serialize + Interpret;

    /// Stable slug ("ad_revenue")
    const ID: &'static str;
    /// Display name
    const NAME: &'static str;
    /// One-line summary for listings
    const DESCRIPTION: &'static str;
    /// Form fields and bounds
    const FIELDS: &'static [FieldRule];

    /// Run the formula on a validated input
    fn run(input: &Self::Input, tables: &RateTables) -> Self::Output;
}

/// Output of running a calculator by name.
///
/// ## JSON Example
///
/// ```json
/// {
///   "calculator": "save_rate",
///   "result": { "save_rate": 2.0, "content_value_rating": "good" },
///   "interpretation": "Good: viewers are bookmarking this content..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub calculator: CalculatorId,
    pub result: serde_json::Value,
    pub interpretation: Option<String>,
}

fn evaluate_with<C: Calculator>(id: CalculatorId, form: &FormValues, tables: &RateTables) -> CalcResult<Evaluation> {
    let input: C::Input = parse_form(C::FIELDS, form).map_err(|report| {
        debug!(calculator = C::ID, errors = report.errors.len(), "form rejected");
        CalcError::Validation { errors: report.errors }
    })?;
    let output = C::run(&input, tables);
    debug!(calculator = C::ID, "calculation complete");
    Ok(Evaluation {
        calculator: id,
        interpretation: output.interpretation(),
        result: serde_json::to_value(&output)?,
    })
}

macro_rules! calculator_registry {
    ($($variant:ident => $calc:ty),* $(,)?) => {
        /// Every available calculator.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum CalculatorId {
            $($variant),*
        }

        impl CalculatorId {
            /// All calculators in listing order
            pub const ALL: &'static [CalculatorId] = &[$(CalculatorId::$variant),*];

            /// Stable slug, identical to the serialized name
            pub fn slug(&self) -> &'static str {
                match self {
                    $(CalculatorId::$variant => <$calc as Calculator>::ID),*
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $(CalculatorId::$variant => <$calc as Calculator>::NAME),*
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $(CalculatorId::$variant => <$calc as Calculator>::DESCRIPTION),*
                }
            }

            pub fn fields(&self) -> &'static [FieldRule] {
                match self {
                    $(CalculatorId::$variant => <$calc as Calculator>::FIELDS),*
                }
            }

            /// Validate a raw form, run the calculator and format its interpretation.
            pub fn evaluate(&self, form: &FormValues, tables: &RateTables) -> CalcResult<Evaluation> {
                match self {
                    $(CalculatorId::$variant => evaluate_with::<$calc>(*self, form, tables)),*
                }
            }
        }
    };
}

calculator_registry! {
    AdRevenue => ad_revenue::AdRevenue,
    Rpm => rpm::Rpm,
    Cpm => cpm::Cpm,
    EngagementRate => engagement_rate::EngagementRate,
    SaveRate => save_rate::SaveRate,
    ShareRatio => share_ratio::ShareRatio,
    LikeRatio => like_ratio::LikeRatio,
    CommentRate => comment_rate::CommentRate,
    CompletionRate => completion_rate::CompletionRate,
    ViewRatio => view_ratio::ViewRatio,
    HashtagEngagement => hashtag_engagement::HashtagEngagement,
    FollowerConversion => follower_conversion::FollowerConversion,
    FollowerGrowth => follower_growth::FollowerGrowth,
    GrowthRate => growth_rate::GrowthRate,
    ShopCommission => shop_commission::ShopCommission,
    AffiliateEarnings => affiliate_earnings::AffiliateEarnings,
    CreatorFund => creator_fund::CreatorFund,
    CreatorRewards => creator_rewards::CreatorRewards,
    RegionalCreatorFund => regional_creator_fund::RegionalCreatorFund,
    BrandDeal => brand_deal::BrandDeal,
    SponsorshipRate => sponsorship_rate::SponsorshipRate,
    LiveGifts => live_gifts::LiveGifts,
    GiftValue => gift_value::GiftValue,
    LiveSubscription => live_subscription::LiveSubscription,
    ContentRoi => content_roi::ContentRoi,
    MultiPlatform => multi_platform::MultiPlatform,
}

impl CalculatorId {
    /// Look up a calculator by slug (dashes accepted in place of underscores)
    pub fn from_slug(slug: &str) -> CalcResult<Self> {
        let normalized = slug.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.slug() == normalized)
            .ok_or_else(|| CalcError::UnknownCalculator { slug: slug.to_string() })
    }
}

impl std::fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Render the calculator catalogue as markdown.
pub fn generate_calculators_markdown() -> String {
    let mut md = String::new();
    md.push_str("# Calculators\n\n");
    md.push_str("Generated from the calculator registry. Do not edit by hand.\n\n");

    for id in CalculatorId::ALL {
        md.push_str(&format!("## {} (`{}`)\n\n", id.display_name(), id.slug()));
        md.push_str(&format!("{}\n\n", id.description()));
        md.push_str("| Field | Label | Kind | Required | Min | Max |\n");
        md.push_str("|-------|-------|------|----------|-----|-----|\n");
        for rule in id.fields() {
            let kind = match rule.kind {
                FieldKind::Number if rule.positive => "number > 0".to_string(),
                FieldKind::Number => "number".to_string(),
                FieldKind::Choice(options) => format!("one of {}", options.join(", ")),
            };
            md.push_str(&format!(
                "| `{}` | {} | {} | {} | {} | {} |\n",
                rule.name,
                rule.label,
                kind,
                if rule.required { "yes" } else { "no" },
                format_bound(rule.min),
                format_bound(rule.max),
            ));
        }
        md.push('\n');
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_slugs_match_serde_names() {
        for id in CalculatorId::ALL {
            assert_eq!(serde_json::to_string(id).unwrap(), format!("\"{}\"", id.slug()));
            assert_eq!(CalculatorId::from_slug(id.slug()).unwrap(), *id);
        }
        assert_eq!(CalculatorId::ALL.len(), 26);
    }

    #[test]
    fn test_from_slug_accepts_dashes() {
        assert_eq!(CalculatorId::from_slug("Ad-Revenue").unwrap(), CalculatorId::AdRevenue);
        assert!(matches!(
            CalculatorId::from_slug("horoscope"),
            Err(CalcError::UnknownCalculator { .. })
        ));
    }

    #[test]
    fn test_every_calculator_declares_fields() {
        for id in CalculatorId::ALL {
            assert!(!id.fields().is_empty(), "{} has no fields", id.slug());
            assert!(!id.description().is_empty());
        }
    }

    #[test]
    fn test_evaluate_reports_every_invalid_field() {
        let mut form = FormValues::new();
        form.insert("monthly_views".into(), json!(-5));
        form.insert("ad_frequency".into(), json!(9));
        let err = CalculatorId::AdRevenue.evaluate(&form, RateTables::builtin()).unwrap_err();
        match err {
            CalcError::Validation { errors } => {
                assert_eq!(errors.len(), 3);
                assert!(errors.contains_key("monthly_views"));
                assert!(errors.contains_key("cpm"));
                assert!(errors.contains_key("ad_frequency"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_ad_revenue() {
        let mut form = FormValues::new();
        form.insert("monthly_views".into(), json!("1000000"));
        form.insert("cpm".into(), json!("5"));
        form.insert("ad_frequency".into(), json!(1));
        let evaluation = CalculatorId::AdRevenue.evaluate(&form, RateTables::builtin()).unwrap();
        assert_eq!(evaluation.calculator, CalculatorId::AdRevenue);
        assert_eq!(evaluation.result["monthly_revenue"], json!(5000.0));
        assert_eq!(evaluation.result["annual_revenue"], json!(60000.0));
    }

    /// A number inside every declared bound, or the first option of a choice
    fn sample_value(rule: &FieldRule) -> serde_json::Value {
        match rule.kind {
            FieldKind::Choice(options) => json!(options[0]),
            FieldKind::Number => {
                let mut value = rule.min.unwrap_or(0.0).max(1.0);
                if let Some(max) = rule.max {
                    value = value.min(max);
                }
                json!(value)
            }
        }
    }

    fn sample_form(id: CalculatorId) -> FormValues {
        id.fields()
            .iter()
            .map(|rule| (rule.name.to_string(), sample_value(rule)))
            .collect()
    }

    fn rejected_fields(id: CalculatorId, form: &FormValues) -> BTreeMap<String, String> {
        match id.evaluate(form, RateTables::builtin()) {
            Err(CalcError::Validation { errors }) => errors,
            other => panic!("{} accepted an invalid form: {other:?}", id.slug()),
        }
    }

    #[test]
    fn test_every_calculator_evaluates_a_valid_form() {
        for id in CalculatorId::ALL {
            let evaluation = id
                .evaluate(&sample_form(*id), RateTables::builtin())
                .unwrap_or_else(|err| panic!("{} rejected a valid form: {err}", id.slug()));
            assert_eq!(evaluation.calculator, *id);
            assert!(evaluation.result.is_object());
        }
    }

    #[test]
    fn test_every_declared_bound_is_enforced() {
        for id in CalculatorId::ALL {
            for rule in id.fields() {
                let mut breaking = Vec::new();
                match rule.kind {
                    FieldKind::Choice(_) => breaking.push(json!("not-an-option")),
                    FieldKind::Number => {
                        breaking.push(json!("lots"));
                        if let Some(min) = rule.min {
                            breaking.push(json!(min - 1.0));
                        }
                        if let Some(max) = rule.max {
                            breaking.push(json!(max + 1.0));
                        }
                        if rule.positive {
                            breaking.push(json!(0.0));
                        }
                    }
                }

                for bad in breaking {
                    let mut form = sample_form(*id);
                    form.insert(rule.name.to_string(), bad.clone());
                    let errors = rejected_fields(*id, &form);
                    assert_eq!(
                        errors.keys().map(String::as_str).collect::<Vec<_>>(),
                        vec![rule.name],
                        "{}.{} = {bad}",
                        id.slug(),
                        rule.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_missing_required_fields_reported() {
        for id in CalculatorId::ALL {
            let required: Vec<&str> = id.fields().iter().filter(|r| r.required).map(|r| r.name).collect();
            let errors = rejected_fields(*id, &FormValues::new());
            assert_eq!(errors.len(), required.len(), "{}", id.slug());
            for name in required {
                assert!(errors[name].ends_with("is required"), "{}.{name}", id.slug());
            }
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let mut form = FormValues::new();
        form.insert("followers".into(), json!(120_000));
        form.insert("engagement_rate".into(), json!(4.2));
        form.insert("niche".into(), json!("tech"));
        form.insert("region".into(), json!("ca"));
        let first = CalculatorId::BrandDeal.evaluate(&form, RateTables::builtin()).unwrap();
        let second = CalculatorId::BrandDeal.evaluate(&form, RateTables::builtin()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_markdown_lists_every_calculator() {
        let md = generate_calculators_markdown();
        for id in CalculatorId::ALL {
            assert!(md.contains(&format!("(`{}`)", id.slug())));
        }
        assert!(md.contains("| `ad_frequency` | Ad frequency | number | yes | 1 | 5 |"));
    }
}
