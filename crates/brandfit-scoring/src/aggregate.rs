//! Weighted aggregation of sub-scores into a compatibility result.

use brandfit_core::{BrandProfile, CreatorProfile, ValidationLimits};

use crate::audience::score_audience_fit;
use crate::engagement::score_engagement;
use crate::niche::score_niche_alignment;
use crate::safety::score_brand_safety;
use crate::sponsorship::score_sponsorship_history;
use crate::types::{
    CompatibilityResult, Confidence, Rating, Recommendation, RecommendationAction, SafetyScore,
    ScoreBreakdown, SubScore,
};

const WEIGHT_NICHE: f64 = 0.30;
const WEIGHT_ENGAGEMENT: f64 = 0.25;
const WEIGHT_AUDIENCE: f64 = 0.15;
const WEIGHT_SAFETY: f64 = 0.20;
const WEIGHT_SPONSORSHIP: f64 = 0.10;

/// Strength line added when the safety scan comes back spotless.
const CLEAN_SAFETY_STRENGTH: &str = "Clean brand safety profile";

/// Required fields for the data-quality diagnostic.
const DATA_QUALITY_FIELD_COUNT: usize = 6;

/// Evaluate one creator against one brand with default validation limits.
#[must_use]
pub fn score_brand_compatibility(
    creator: &CreatorProfile,
    brand: &BrandProfile,
) -> CompatibilityResult {
    score_brand_compatibility_with_limits(creator, brand, &ValidationLimits::default())
}

/// Evaluate one creator against one brand.
///
/// Validation failures short-circuit to a zero-score `Invalid Data`
/// result carrying the collected errors as flags; this is a per-record
/// outcome, never an error for the batch. Otherwise all five sub-scorers
/// run independently and the weighted overall score drives the rating and
/// recommendation ladders, with high-risk safety matches vetoing the
/// recommendation outright.
#[must_use]
pub fn score_brand_compatibility_with_limits(
    creator: &CreatorProfile,
    brand: &BrandProfile,
    limits: &ValidationLimits,
) -> CompatibilityResult {
    let errors = creator.validate(limits);
    if !errors.is_empty() {
        return invalid_result(creator, errors);
    }

    let niche = score_niche_alignment(creator, brand);
    let engagement = score_engagement(creator);
    let audience = score_audience_fit(creator, brand);
    let safety = score_brand_safety(creator);
    let sponsorship = score_sponsorship_history(creator);

    let overall = weighted_overall([
        (&niche as &dyn SubScore, WEIGHT_NICHE),
        (&engagement, WEIGHT_ENGAGEMENT),
        (&audience, WEIGHT_AUDIENCE),
        (&safety, WEIGHT_SAFETY),
        (&sponsorship, WEIGHT_SPONSORSHIP),
    ]);

    let mut strengths = Vec::new();
    let mut flags = Vec::new();

    if niche.score() >= 80 {
        strengths.push(niche.message().to_string());
    } else if niche.score() < 50 {
        flags.push(niche.message().to_string());
    }

    if engagement.score() >= 80 {
        strengths.push(engagement.message().to_string());
    } else if engagement.score() < 50 {
        flags.push(engagement.message().to_string());
    }

    flags.extend(safety.flags.iter().cloned());
    if safety.score() >= 90 {
        strengths.push(CLEAN_SAFETY_STRENGTH.to_string());
    }

    if sponsorship.score() >= 80 {
        strengths.push(sponsorship.message().to_string());
    }

    let recommendation = recommend(overall, &safety);
    let rating = Rating::for_score(overall);
    let data_quality_score = data_quality(creator);

    CompatibilityResult {
        overall_score: overall,
        rating,
        recommendation,
        scores: Some(ScoreBreakdown {
            niche_alignment: niche,
            engagement_quality: engagement,
            audience_fit: audience,
            brand_safety: safety,
            sponsorship_history: sponsorship,
        }),
        strengths,
        flags,
        data_quality_score,
    }
}

/// Weighted sum of the sub-scores, rounded half-up to the nearest integer.
fn weighted_overall(parts: [(&dyn SubScore, f64); 5]) -> u8 {
    let total: f64 = parts
        .iter()
        .map(|(sub, weight)| f64::from(sub.score()) * weight)
        .sum();
    // Weights sum to 1.0 and sub-scores are capped at 100, so the rounded
    // total always fits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        total.round() as u8
    }
}

fn recommend(overall: u8, safety: &SafetyScore) -> Recommendation {
    // Safety veto: a high-risk match overrides the score ladder entirely.
    if safety.has_high_risk() {
        return Recommendation {
            action: RecommendationAction::Avoid,
            message: "High-risk content detected; do not engage".to_string(),
            confidence: Confidence::High,
        };
    }

    let (action, message, confidence) = if overall >= 85 {
        (
            RecommendationAction::StrongRecommend,
            "Excellent fit; prioritize outreach",
            Confidence::High,
        )
    } else if overall >= 65 {
        (
            RecommendationAction::Recommend,
            "Strong fit for this brand",
            Confidence::Medium,
        )
    } else if overall >= 50 {
        (
            RecommendationAction::Consider,
            "Possible fit; review manually",
            Confidence::Low,
        )
    } else {
        (
            RecommendationAction::NotRecommended,
            "Poor fit for this brand",
            Confidence::Medium,
        )
    };

    Recommendation {
        action,
        message: message.to_string(),
        confidence,
    }
}

fn invalid_result(creator: &CreatorProfile, errors: Vec<String>) -> CompatibilityResult {
    CompatibilityResult {
        overall_score: 0,
        rating: Rating::INVALID,
        recommendation: Recommendation {
            action: RecommendationAction::Error,
            message: "Creator data failed validation".to_string(),
            confidence: Confidence::High,
        },
        scores: None,
        strengths: Vec::new(),
        flags: errors,
        data_quality_score: data_quality(creator),
    }
}

/// Percentage of the required field set present and non-empty on the
/// creator record. Purely diagnostic; does not feed the overall score.
fn data_quality(creator: &CreatorProfile) -> u8 {
    let present = [
        !creator.username.trim().is_empty(),
        creator.followers > 0,
        creator.engagement_rate.is_some(),
        creator.bio.as_deref().is_some_and(|b| !b.trim().is_empty()),
        creator.verified.is_some(),
        creator
            .nickname
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty()),
    ];
    let count = present.iter().filter(|p| **p).count();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    {
        (count as f64 / DATA_QUALITY_FIELD_COUNT as f64 * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The worked example: micro-tier tech reviewer against a technology
    /// brand targeting micro creators.
    fn tech_reviewer() -> CreatorProfile {
        CreatorProfile {
            username: "techsavvy".to_string(),
            nickname: Some("Tech Savvy".to_string()),
            bio: Some("tech reviewer and gadget lover".to_string()),
            followers: 25_000,
            engagement_rate: Some(6.0),
            verified: Some(true),
            bio_link: Some("linktr.ee/x".to_string()),
            ..CreatorProfile::default()
        }
    }

    fn tech_brand() -> BrandProfile {
        BrandProfile {
            name: Some("Nova Audio".to_string()),
            category: Some("technology".to_string()),
            target_tier: Some("micro".to_string()),
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let sum =
            WEIGHT_NICHE + WEIGHT_ENGAGEMENT + WEIGHT_AUDIENCE + WEIGHT_SAFETY + WEIGHT_SPONSORSHIP;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn worked_example_scores_eighty_four() {
        let result = score_brand_compatibility(&tech_reviewer(), &tech_brand());
        let scores = result.scores.as_ref().unwrap();

        assert_eq!(scores.niche_alignment.score, 75);
        assert_eq!(scores.engagement_quality.score, 75);
        assert_eq!(scores.audience_fit.score, 95);
        assert_eq!(scores.brand_safety.score, 100);
        assert_eq!(scores.sponsorship_history.score, 80);

        // round(75*0.3 + 75*0.25 + 95*0.15 + 100*0.2 + 80*0.1) = round(83.5)
        assert_eq!(result.overall_score, 84);
        assert_eq!(result.rating.label, "Good Match");
        assert_eq!(result.recommendation.action, RecommendationAction::Recommend);
        assert_eq!(result.recommendation.confidence, Confidence::Medium);
    }

    #[test]
    fn worked_example_collects_expected_strengths() {
        let result = score_brand_compatibility(&tech_reviewer(), &tech_brand());
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Clean brand safety profile"));
        // Sponsorship score of 80 is a strength too.
        assert!(result.strengths.iter().any(|s| s.contains("Verified")));
        assert!(result.flags.is_empty());
    }

    #[test]
    fn excellent_overall_is_strongly_recommended() {
        let mut creator = tech_reviewer();
        creator.bio = Some("tech gadget reviews and twitch streamer".to_string());
        creator.engagement_rate = Some(8.0);
        creator.commerce_user = Some(true);

        let result = score_brand_compatibility(&creator, &tech_brand());
        // niche 95 + engagement 95 + audience 95 + safety 100 + sponsorship 95.
        assert!(result.overall_score >= 85, "got {}", result.overall_score);
        assert_eq!(result.rating.label, "Excellent Match");
        assert_eq!(
            result.recommendation.action,
            RecommendationAction::StrongRecommend
        );
        assert_eq!(result.recommendation.confidence, Confidence::High);
        // Strong niche alignment lands in strengths.
        assert!(result.strengths.iter().any(|s| s.contains("niche")));
    }

    #[test]
    fn overall_stays_within_bounds() {
        let perfect = CreatorProfile {
            username: "ideal".to_string(),
            nickname: Some("Ideal".to_string()),
            bio: Some("tech gadget coding reviews".to_string()),
            followers: 25_000,
            engagement_rate: Some(9.0),
            verified: Some(true),
            commerce_user: Some(true),
            bio_links: vec!["a.example.com".to_string(), "b.example.com".to_string()],
            ..CreatorProfile::default()
        };
        let result = score_brand_compatibility(&perfect, &tech_brand());
        assert!(result.overall_score <= 100);

        let empty = CreatorProfile {
            username: "ghost".to_string(),
            followers: 0,
            ..CreatorProfile::default()
        };
        let result = score_brand_compatibility(&empty, &tech_brand());
        assert!(result.overall_score > 0);
    }

    #[test]
    fn high_risk_keyword_vetoes_recommendation() {
        let mut creator = tech_reviewer();
        creator.bio = Some("tech reviewer involved in a recent scandal".to_string());
        creator.commerce_user = Some(true);
        creator.engagement_rate = Some(9.0);

        let result = score_brand_compatibility(&creator, &tech_brand());
        let scores = result.scores.as_ref().unwrap();
        assert!(scores.brand_safety.score <= 70);
        assert!(!result.flags.is_empty());
        assert_eq!(result.recommendation.action, RecommendationAction::Avoid);
        assert_eq!(result.recommendation.confidence, Confidence::High);
    }

    #[test]
    fn invalid_followers_short_circuits() {
        let mut creator = tech_reviewer();
        creator.followers = -5;

        let result = score_brand_compatibility(&creator, &tech_brand());
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.rating.label, "Invalid Data");
        assert_eq!(result.recommendation.action, RecommendationAction::Error);
        assert_eq!(result.recommendation.confidence, Confidence::High);
        assert!(result.scores.is_none());
        assert!(result.flags.iter().any(|f| f.contains("negative")));
    }

    #[test]
    fn configured_limits_are_applied() {
        let limits = ValidationLimits {
            max_followers: 20_000,
            ..ValidationLimits::default()
        };
        let result = score_brand_compatibility_with_limits(&tech_reviewer(), &tech_brand(), &limits);
        assert_eq!(result.rating.label, "Invalid Data");
        assert!(result.flags.iter().any(|f| f.contains("exceeds maximum")));
    }

    #[test]
    fn low_sub_scores_become_flags() {
        let creator = CreatorProfile {
            username: "mismatch".to_string(),
            bio: Some("makeup and skincare tips".to_string()),
            followers: 25_000,
            engagement_rate: Some(0.5),
            ..CreatorProfile::default()
        };
        let result = score_brand_compatibility(&creator, &tech_brand());
        // Niche 30 and engagement 30 both flag.
        assert!(result.flags.iter().any(|f| f.contains("niche")));
        assert!(result.flags.iter().any(|f| f.contains("engagement")));
    }

    #[test]
    fn data_quality_counts_present_fields() {
        let result = score_brand_compatibility(&tech_reviewer(), &tech_brand());
        // All six required fields are present.
        assert_eq!(result.data_quality_score, 100);

        let sparse = CreatorProfile {
            username: "sparse".to_string(),
            followers: 10_000,
            ..CreatorProfile::default()
        };
        let result = score_brand_compatibility(&sparse, &tech_brand());
        // username + followers only: 2 of 6.
        assert_eq!(result.data_quality_score, 33);
    }

    #[test]
    fn output_uses_downstream_field_names() {
        let result = score_brand_compatibility(&tech_reviewer(), &tech_brand());
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("overallScore").is_some());
        assert!(json.get("dataQualityScore").is_some());
        assert!(json["rating"].get("label").is_some());
        assert_eq!(json["recommendation"]["action"], "recommend");
        let scores = &json["scores"];
        for key in [
            "nicheAlignment",
            "engagementQuality",
            "audienceFit",
            "brandSafety",
            "sponsorshipHistory",
        ] {
            assert!(scores.get(key).is_some(), "missing scores.{key}");
        }
    }

    #[test]
    fn invalid_result_omits_scores_in_json() {
        let mut creator = tech_reviewer();
        creator.followers = -1;
        let result = score_brand_compatibility(&creator, &tech_brand());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("scores").is_none());
        assert_eq!(json["rating"]["label"], "Invalid Data");
    }
}
