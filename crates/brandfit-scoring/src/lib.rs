//! Brand–creator compatibility scoring engine.
//!
//! Five independent sub-scorers (niche alignment, engagement quality,
//! audience-size fit, brand safety, sponsorship readiness) each produce a
//! 0–100 score plus qualitative messages and flags. Fixed weights combine
//! them into an overall score, which maps to a rating label and an action
//! recommendation. A ranker fans the aggregator out over a creator list
//! and buckets the results.
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable
//! state, fresh value objects on every call. Invalid creator input is a
//! *value* (an `Invalid Data` result), not an error.

pub mod aggregate;
pub mod audience;
pub mod engagement;
pub mod lexicon;
pub mod matcher;
pub mod niche;
pub mod rank;
pub mod safety;
pub mod sponsorship;
pub mod types;

pub use aggregate::{score_brand_compatibility, score_brand_compatibility_with_limits};
pub use audience::score_audience_fit;
pub use engagement::score_engagement;
pub use matcher::{contains_keyword, profile_text};
pub use niche::score_niche_alignment;
pub use rank::{rank_creators_for_brand, rank_creators_for_brand_with_limits};
pub use safety::score_brand_safety;
pub use sponsorship::score_sponsorship_history;
pub use types::{
    AudienceScore, CompatibilityResult, Confidence, EngagementScore, NicheScore, RankedCreator,
    RankingResult, RankingSummary, Rating, Recommendation, RecommendationAction, RiskLevel,
    SafetyScore, ScoreBreakdown, SponsorshipScore, SubScore,
};
