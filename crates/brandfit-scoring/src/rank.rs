//! Ranking a creator list for one brand.

use brandfit_core::{BrandProfile, CreatorProfile, ValidationLimits};

use crate::aggregate::score_brand_compatibility_with_limits;
use crate::types::{RankedCreator, RankingResult, RankingSummary};

/// Rank creators for a brand with default validation limits.
#[must_use]
pub fn rank_creators_for_brand(creators: &[CreatorProfile], brand: &BrandProfile) -> RankingResult {
    rank_creators_for_brand_with_limits(creators, brand, &ValidationLimits::default())
}

/// Evaluate every creator against the brand and rank them.
///
/// Each evaluation is independent of every other; this is a plain map
/// followed by a stable descending sort, so tied scores keep their input
/// order. An empty creator list yields an empty ranking with no top pick
/// — handling that case before calling is the caller's concern.
#[must_use]
pub fn rank_creators_for_brand_with_limits(
    creators: &[CreatorProfile],
    brand: &BrandProfile,
    limits: &ValidationLimits,
) -> RankingResult {
    let mut ranked: Vec<RankedCreator> = creators
        .iter()
        .map(|creator| {
            let result = score_brand_compatibility_with_limits(creator, brand, limits);
            tracing::debug!(
                creator = %creator.username,
                score = result.overall_score,
                "scored creator"
            );
            RankedCreator {
                username: creator.username.clone(),
                result,
            }
        })
        .collect();

    // Stable sort: equal scores retain input order.
    ranked.sort_by(|a, b| b.result.overall_score.cmp(&a.result.overall_score));

    let mut summary = RankingSummary::default();
    for entry in &ranked {
        summary.record(entry.result.overall_score);
    }

    let top_pick = ranked.first().cloned();

    RankingResult {
        brand: brand.clone(),
        ranked_creators: ranked,
        top_pick,
        summary,
    }
}
