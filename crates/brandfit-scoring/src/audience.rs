//! Audience-size fit scoring.

use brandfit_core::{classify_tier, BrandProfile, CreatorProfile, Tier};

use crate::types::AudienceScore;

/// Score how closely the creator's audience tier matches the brand's
/// target tier.
///
/// An absent target, `"any"`, or an unrecognized label all mean "no
/// constraint" and yield the neutral score.
#[must_use]
pub fn score_audience_fit(creator: &CreatorProfile, brand: &BrandProfile) -> AudienceScore {
    let followers = u64::try_from(creator.followers).unwrap_or(0);
    let creator_tier = classify_tier(followers);

    let target = brand
        .target_tier
        .as_deref()
        .map(str::to_lowercase)
        .and_then(|t| Tier::parse(&t));

    let (score, message) = match target {
        None => (70, "No audience size constraint for this brand".to_string()),
        Some(t) if t == creator_tier => {
            (95, format!("Perfect audience size match ({creator_tier} tier)"))
        }
        Some(t) if creator_tier.distance(t) == 1 => (
            70,
            format!("Close audience size fit: creator is {creator_tier}, target is {t}"),
        ),
        Some(t) => (
            40,
            format!("Audience size mismatch: creator is {creator_tier}, target is {t}"),
        ),
    };

    AudienceScore {
        score,
        message,
        creator_tier,
        target_tier: target,
    }
}
