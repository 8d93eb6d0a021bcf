//! Console and JSON report sinks.

use brandfit_scoring::{CompatibilityResult, RankingResult, SubScore};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON envelope for a single-creator evaluation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport<'a> {
    generated_at: DateTime<Utc>,
    username: &'a str,
    #[serde(flatten)]
    result: &'a CompatibilityResult,
}

/// JSON envelope for a ranking run.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    ranking: &'a RankingResult,
}

pub(crate) fn print_score_json(username: &str, result: &CompatibilityResult) -> anyhow::Result<()> {
    let report = ScoreReport {
        generated_at: Utc::now(),
        username,
        result,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn print_ranking_json(ranking: &RankingResult) -> anyhow::Result<()> {
    let report = RankReport {
        generated_at: Utc::now(),
        ranking,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn print_compatibility(username: &str, result: &CompatibilityResult) {
    println!("@{username}: {} / 100 — {}", result.overall_score, result.rating.label);
    println!(
        "  recommendation: {} ({} confidence)",
        result.recommendation.action, result.recommendation.confidence
    );
    println!("  {}", result.recommendation.message);

    if let Some(scores) = result.scores.as_ref() {
        println!("  scores:");
        print_sub("niche alignment", &scores.niche_alignment);
        print_sub("engagement", &scores.engagement_quality);
        print_sub("audience fit", &scores.audience_fit);
        print_sub("brand safety", &scores.brand_safety);
        print_sub("sponsorship", &scores.sponsorship_history);
    }

    if !result.strengths.is_empty() {
        println!("  strengths:");
        for s in &result.strengths {
            println!("    + {s}");
        }
    }
    if !result.flags.is_empty() {
        println!("  flags:");
        for f in &result.flags {
            println!("    ! {f}");
        }
    }
    println!("  data quality: {}%", result.data_quality_score);
}

fn print_sub(name: &str, sub: &dyn SubScore) {
    println!("    {name:<16} {:>3}  {}", sub.score(), sub.message());
}

pub(crate) fn print_ranking(ranking: &RankingResult) {
    println!(
        "ranking for {} ({} creators)",
        ranking.brand.display_name(),
        ranking.ranked_creators.len()
    );
    println!(
        "  excellent: {}  good: {}  moderate: {}  weak: {}",
        ranking.summary.excellent,
        ranking.summary.good,
        ranking.summary.moderate,
        ranking.summary.weak
    );

    for (idx, entry) in ranking.ranked_creators.iter().enumerate() {
        println!(
            "  {:>2}. @{:<20} {:>3}  {:<16} {}",
            idx + 1,
            entry.username,
            entry.result.overall_score,
            entry.result.rating.label,
            entry.result.recommendation.action
        );
    }

    if let Some(top) = ranking.top_pick.as_ref() {
        println!(
            "top pick: @{} ({} / 100, {})",
            top.username, top.result.overall_score, top.result.rating.label
        );
    }
}
