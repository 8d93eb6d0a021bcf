//! Engagement quality scoring.

use brandfit_core::{classify_tier, CreatorProfile};

use crate::lexicon::engagement_thresholds;
use crate::types::EngagementScore;

/// Score the creator's engagement rate against the expectations for their
/// audience tier.
///
/// A missing rate is treated as 0 and lands on the lowest rung rather
/// than erroring.
#[must_use]
pub fn score_engagement(creator: &CreatorProfile) -> EngagementScore {
    let followers = u64::try_from(creator.followers).unwrap_or(0);
    let tier = classify_tier(followers);
    let rate = creator.engagement_rate.unwrap_or(0.0);
    let thresholds = engagement_thresholds(tier);

    let (score, qualifier) = if rate >= thresholds.excellent {
        (95, "Excellent")
    } else if rate >= thresholds.good {
        (75, "Good")
    } else if rate >= thresholds.acceptable {
        (55, "Acceptable")
    } else {
        (30, "Low")
    };

    EngagementScore {
        score,
        message: format!("{qualifier} engagement: {rate:.1}% ({tier} tier)"),
        rate,
        tier,
    }
}
