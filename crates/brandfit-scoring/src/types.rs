//! Result records produced by the scoring engine.
//!
//! All of these are value objects created fresh per evaluation and never
//! mutated afterwards. Serde names match the JSON document consumed
//! downstream (`overallScore`, `rating.label`, `recommendation.action`,
//! `scores`, `strengths`, `flags`, `dataQualityScore`).

use brandfit_core::{BrandProfile, Tier};
use serde::Serialize;

/// Common interface over the five sub-scorer results.
///
/// The aggregator consumes sub-scores polymorphically through this trait;
/// everything scorer-specific stays on the concrete types.
pub trait SubScore {
    /// Sub-score in 0–100.
    fn score(&self) -> u8;
    /// Human-readable summary for reports.
    fn message(&self) -> &str;
}

macro_rules! impl_sub_score {
    ($ty:ty) => {
        impl SubScore for $ty {
            fn score(&self) -> u8 {
                self.score
            }
            fn message(&self) -> &str {
                &self.message
            }
        }
    };
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheScore {
    pub score: u8,
    pub message: String,
    /// Niches shared between the creator and the brand's compatible set.
    pub matched_niches: Vec<String>,
    /// Everything extracted from the creator profile, in table order.
    pub detected_niches: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementScore {
    pub score: u8,
    pub message: String,
    pub rate: f64,
    pub tier: Tier,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceScore {
    pub score: u8,
    pub message: String,
    pub creator_tier: Tier,
    /// Parsed target tier; `None` when the brand has no constraint.
    pub target_tier: Option<Tier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyScore {
    pub score: u8,
    pub message: String,
    pub risk_level: RiskLevel,
    /// Formatted flag strings, one per risky keyword match.
    pub flags: Vec<String>,
    /// Keywords from the high-risk list found in the profile.
    pub high_risk_matches: Vec<String>,
    /// Keywords from the medium-risk list found in the profile.
    pub medium_risk_matches: Vec<String>,
    /// Prior-sponsorship signals from the informational list; no deduction.
    pub sponsorship_signals: Vec<String>,
}

impl SafetyScore {
    /// Whether any high-risk keyword matched — the recommendation veto.
    #[must_use]
    pub fn has_high_risk(&self) -> bool {
        !self.high_risk_matches.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipScore {
    pub score: u8,
    pub message: String,
}

impl_sub_score!(NicheScore);
impl_sub_score!(EngagementScore);
impl_sub_score!(AudienceScore);
impl_sub_score!(SafetyScore);
impl_sub_score!(SponsorshipScore);

/// The five sub-scores keyed by scorer name in the output document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub niche_alignment: NicheScore,
    pub engagement_quality: EngagementScore,
    pub audience_fit: AudienceScore,
    pub brand_safety: SafetyScore,
    pub sponsorship_history: SponsorshipScore,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rating {
    pub label: &'static str,
    pub color: &'static str,
}

impl Rating {
    pub const INVALID: Rating = Rating {
        label: "Invalid Data",
        color: "gray",
    };

    /// Map an overall score onto the rating ladder.
    #[must_use]
    pub fn for_score(overall: u8) -> Self {
        if overall >= 85 {
            Rating {
                label: "Excellent Match",
                color: "green",
            }
        } else if overall >= 70 {
            Rating {
                label: "Good Match",
                color: "lightgreen",
            }
        } else if overall >= 55 {
            Rating {
                label: "Moderate Match",
                color: "yellow",
            }
        } else if overall >= 40 {
            Rating {
                label: "Weak Match",
                color: "orange",
            }
        } else {
            Rating {
                label: "Poor Match",
                color: "red",
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationAction {
    StrongRecommend,
    Recommend,
    Consider,
    NotRecommended,
    Avoid,
    Error,
}

impl std::fmt::Display for RecommendationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecommendationAction::StrongRecommend => "strong_recommend",
            RecommendationAction::Recommend => "recommend",
            RecommendationAction::Consider => "consider",
            RecommendationAction::NotRecommended => "not_recommended",
            RecommendationAction::Avoid => "avoid",
            RecommendationAction::Error => "error",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub message: String,
    pub confidence: Confidence,
}

/// Full compatibility evaluation of one creator against one brand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub overall_score: u8,
    pub rating: Rating,
    pub recommendation: Recommendation,
    /// Absent when validation failed and no sub-scorer ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreBreakdown>,
    pub strengths: Vec<String>,
    pub flags: Vec<String>,
    pub data_quality_score: u8,
}

/// One entry of a ranking, pairing the username with its evaluation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCreator {
    pub username: String,
    #[serde(flatten)]
    pub result: CompatibilityResult,
}

/// Counts per rating bucket. The `weak` bucket absorbs everything below
/// 55, including invalid records, so the counts always sum to the input
/// size.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingSummary {
    pub excellent: usize,
    pub good: usize,
    pub moderate: usize,
    pub weak: usize,
}

impl RankingSummary {
    pub(crate) fn record(&mut self, overall: u8) {
        if overall >= 85 {
            self.excellent += 1;
        } else if overall >= 70 {
            self.good += 1;
        } else if overall >= 55 {
            self.moderate += 1;
        } else {
            self.weak += 1;
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.excellent + self.good + self.moderate + self.weak
    }
}

/// Ranked evaluation of many creators for one brand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub brand: BrandProfile,
    pub ranked_creators: Vec<RankedCreator>,
    /// Highest-ranked entry; `None` when the creator list was empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_pick: Option<RankedCreator>,
    pub summary: RankingSummary,
}
