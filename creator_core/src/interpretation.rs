//! # Interpretations
//!
//! Short prose summaries of calculator results. Formulas stay numeric; this
//! module maps their tiers and flags onto message templates.
//!
//! ```rust
//! use creator_core::calculations::save_rate::{calculate, SaveRateInput};
//! use creator_core::interpretation::Interpret;
//!
//! let result = calculate(&SaveRateInput { views: 50_000.0, saves: 1_000.0 });
//! let text = result.interpretation().unwrap();
//! assert!(text.starts_with("Good: viewers are bookmarking this content"));
//! ```

use crate::calculations::{
    ad_revenue::AdRevenueResult, affiliate_earnings::AffiliateEarningsResult, brand_deal::BrandDealResult,
    comment_rate::CommentRateResult, completion_rate::CompletionRateResult, content_roi::ContentRoiResult,
    cpm::CpmResult, creator_fund, creator_fund::CreatorFundResult, creator_rewards::CreatorRewardsResult,
    engagement_rate::EngagementRateResult, follower_conversion::FollowerConversionResult,
    follower_growth::FollowerGrowthResult, gift_value::GiftValueResult, growth_rate::GrowthRateResult,
    hashtag_engagement::HashtagEngagementResult, like_ratio::LikeRatioResult, live_gifts::LiveGiftsResult,
    live_subscription::LiveSubscriptionResult, multi_platform::MultiPlatformResult,
    regional_creator_fund::RegionalCreatorFundResult, rpm::RpmResult, save_rate::SaveRateResult,
    share_ratio::ShareRatioResult, shop_commission::ShopCommissionResult,
    sponsorship_rate::SponsorshipRateResult, view_ratio::ViewRatioResult,
};
use crate::rating::Tier;

/// Optional prose summary of a result.
pub trait Interpret {
    fn interpretation(&self) -> Option<String> {
        None
    }
}

/// One message per tier, best first.
pub struct TierMessages {
    pub excellent: &'static str,
    pub good: &'static str,
    pub average: &'static str,
    pub below_average: &'static str,
}

impl TierMessages {
    pub fn message(&self, tier: Tier) -> &'static str {
        match tier {
            Tier::Excellent => self.excellent,
            Tier::Good => self.good,
            Tier::Average => self.average,
            Tier::BelowAverage => self.below_average,
        }
    }

    /// "Good: <message> (2% save rate)"
    pub fn render(&self, tier: Tier, value: f64, unit: &str) -> String {
        format!("{}: {} ({}{})", tier.display_name(), self.message(tier), value, unit)
    }
}

const ENGAGEMENT: TierMessages = TierMessages {
    excellent: "your audience is highly engaged, well above typical TikTok accounts",
    good: "solid engagement that brands will notice",
    average: "typical engagement; stronger hooks and calls to action can lift it",
    below_average: "engagement is low; test new formats and reply to comments",
};

const SAVES: TierMessages = TierMessages {
    excellent: "viewers treat this content as a reference worth keeping",
    good: "viewers are bookmarking this content to come back to it",
    average: "some viewers save this; tutorials and lists usually save better",
    below_average: "few viewers save this; add practical takeaways",
};

const SHARES: TierMessages = TierMessages {
    excellent: "this content spreads well beyond your followers",
    good: "viewers regularly pass this content on",
    average: "occasional shares; relatable or surprising moments help",
    below_average: "rarely shared; give viewers a reason to send it to someone",
};

const LIKES: TierMessages = TierMessages {
    excellent: "viewers love this content",
    good: "a healthy share of viewers hit like",
    average: "likes are in the usual range",
    below_average: "few viewers like this; the first seconds may not land",
};

const COMMENTS: TierMessages = TierMessages {
    excellent: "this content starts conversations",
    good: "viewers are talking back",
    average: "comment activity is typical; ask a question to invite more",
    below_average: "viewers rarely comment; prompt them directly",
};

const RETENTION: TierMessages = TierMessages {
    excellent: "viewers watch nearly all of this video",
    good: "most viewers stay for the bulk of the video",
    average: "many viewers drop off before the end; tighten the pacing",
    below_average: "viewers leave early; rework the hook and trim the length",
};

const REACH: TierMessages = TierMessages {
    excellent: "videos reach far past your follower count",
    good: "the algorithm is showing your videos to a good share of followers and beyond",
    average: "reach is typical for your audience size",
    below_average: "videos reach only a small slice of your followers",
};

const HASHTAG: TierMessages = TierMessages {
    excellent: "this hashtag strongly outperforms your usual engagement",
    good: "this hashtag gives a clear engagement lift",
    average: "this hashtag performs about as well as your baseline",
    below_average: "this hashtag underperforms your baseline; consider dropping it",
};

const GROWTH: TierMessages = TierMessages {
    excellent: "rapid follower growth",
    good: "strong, steady growth",
    average: "moderate growth",
    below_average: "growth is slow; post more consistently and ride trends",
};

const RPM_BENCHMARK: TierMessages = TierMessages {
    excellent: "top-end Creator Fund payouts per view",
    good: "above the usual Creator Fund rate",
    average: "within the usual Creator Fund range",
    below_average: "below the usual Creator Fund range",
};

const ROI: TierMessages = TierMessages {
    excellent: "this content more than doubled its cost",
    good: "a healthy return on production spend",
    average: "the content paid for itself with a modest return",
    below_average: "the content did not recover its production cost",
};

fn money(value: f64) -> String {
    format!("${:.2}", value)
}

impl Interpret for EngagementRateResult {
    fn interpretation(&self) -> Option<String> {
        Some(ENGAGEMENT.render(self.rating, self.engagement_rate, "% engagement rate"))
    }
}

impl Interpret for SaveRateResult {
    fn interpretation(&self) -> Option<String> {
        Some(SAVES.render(self.content_value_rating, self.save_rate, "% save rate"))
    }
}

impl Interpret for ShareRatioResult {
    fn interpretation(&self) -> Option<String> {
        Some(SHARES.render(self.virality, self.share_ratio, "% share ratio"))
    }
}

impl Interpret for LikeRatioResult {
    fn interpretation(&self) -> Option<String> {
        Some(LIKES.render(self.rating, self.like_ratio, "% like ratio"))
    }
}

impl Interpret for CommentRateResult {
    fn interpretation(&self) -> Option<String> {
        Some(COMMENTS.render(self.rating, self.comment_rate, "% comment rate"))
    }
}

impl Interpret for CompletionRateResult {
    fn interpretation(&self) -> Option<String> {
        let mut text = RETENTION.render(self.retention, self.completion_rate, "% completion");
        if self.rewatch_signal {
            text.push_str(". Viewers are rewatching, a strong signal for the For You feed");
        }
        Some(text)
    }
}

impl Interpret for ViewRatioResult {
    fn interpretation(&self) -> Option<String> {
        Some(REACH.render(self.reach, self.views_per_follower, "% views per follower"))
    }
}

impl Interpret for HashtagEngagementResult {
    fn interpretation(&self) -> Option<String> {
        Some(HASHTAG.render(self.rating, self.engagement_lift, "% lift"))
    }
}

impl Interpret for GrowthRateResult {
    fn interpretation(&self) -> Option<String> {
        Some(GROWTH.render(self.rating, self.growth_rate, "% growth"))
    }
}

impl Interpret for RpmResult {
    fn interpretation(&self) -> Option<String> {
        Some(RPM_BENCHMARK.render(self.benchmark, self.rpm, " RPM"))
    }
}

impl Interpret for ContentRoiResult {
    fn interpretation(&self) -> Option<String> {
        Some(ROI.render(self.rating, self.roi, "% ROI"))
    }
}

impl Interpret for CreatorFundResult {
    fn interpretation(&self) -> Option<String> {
        let text = if self.eligible {
            format!(
                "Eligible for the Creator Fund. Expect {} to {} per month.",
                money(self.monthly_earnings.min),
                money(self.monthly_earnings.max)
            )
        } else {
            format!(
                "Not yet eligible: the Creator Fund needs {} followers and {} views in 30 days.",
                creator_fund::MIN_FOLLOWERS,
                creator_fund::MIN_MONTHLY_VIEWS
            )
        };
        Some(text)
    }
}

impl Interpret for CreatorRewardsResult {
    fn interpretation(&self) -> Option<String> {
        let text = if self.eligible {
            format!(
                "Eligible for the Creator Rewards Program. Qualified views earn {} to {} per month.",
                money(self.monthly_earnings.min),
                money(self.monthly_earnings.max)
            )
        } else {
            "Not yet eligible for the Creator Rewards Program; grow followers and qualified views first."
                .to_string()
        };
        Some(text)
    }
}

impl Interpret for FollowerGrowthResult {
    fn interpretation(&self) -> Option<String> {
        let text = if self.target_reached {
            "You have already reached your follower target.".to_string()
        } else {
            format!(
                "At this pace you need {} more followers, about {} days ({} months).",
                self.followers_needed, self.days_to_target, self.months_to_target
            )
        };
        Some(text)
    }
}

impl Interpret for MultiPlatformResult {
    fn interpretation(&self) -> Option<String> {
        Some(format!(
            "{} is your strongest platform for ad revenue. Its average RPM is {}x the lowest-paying platform.",
            self.best_platform, self.rpm_gap
        ))
    }
}

impl Interpret for AdRevenueResult {}
impl Interpret for CpmResult {}
impl Interpret for FollowerConversionResult {}
impl Interpret for ShopCommissionResult {}
impl Interpret for AffiliateEarningsResult {}
impl Interpret for RegionalCreatorFundResult {}
impl Interpret for BrandDealResult {}
impl Interpret for SponsorshipRateResult {}
impl Interpret for LiveGiftsResult {}
impl Interpret for GiftValueResult {}
impl Interpret for LiveSubscriptionResult {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::multi_platform::{self, MultiPlatformInput};
    use crate::equations::EarningsRange;

    #[test]
    fn test_every_tier_has_a_message() {
        for messages in [&ENGAGEMENT, &SAVES, &SHARES, &LIKES, &COMMENTS, &RETENTION, &REACH, &HASHTAG, &GROWTH, &RPM_BENCHMARK, &ROI] {
            for tier in Tier::ALL {
                assert!(!messages.message(tier).is_empty());
            }
        }
    }

    #[test]
    fn test_tiered_render() {
        let result = SaveRateResult {
            save_rate: 2.0,
            content_value_rating: Tier::Good,
        };
        assert_eq!(
            result.interpretation().unwrap(),
            "Good: viewers are bookmarking this content to come back to it (2% save rate)"
        );
    }

    #[test]
    fn test_creator_fund_eligibility_text() {
        let result = CreatorFundResult {
            monthly_earnings: EarningsRange::new(4.0, 8.0),
            annual_earnings: EarningsRange::new(48.0, 96.0),
            eligible: false,
        };
        assert!(result.interpretation().unwrap().starts_with("Not yet eligible"));
    }

    #[test]
    fn test_multi_platform_sentence() {
        let result = multi_platform::calculate(&MultiPlatformInput {
            tiktok_views: 100_000.0,
            youtube_views: 100_000.0,
            instagram_views: 100_000.0,
        });
        let text = result.interpretation().unwrap();
        assert!(text.starts_with("YouTube is your strongest platform"));
        assert!(text.contains("11.67x"));
    }

    #[test]
    fn test_plain_results_have_no_text() {
        let result = GiftValueResult {
            purchase_cost: 10.6,
            creator_diamonds: 500.0,
            creator_earnings: 2.5,
            platform_share: 8.1,
        };
        assert!(result.interpretation().is_none());
    }
}
