//! Command handlers for the CLI.
//!
//! These run after config and logging are established. Per-creator fetch
//! failures are logged and skipped inside the scraper; what is fatal here
//! are caller-contract violations — an unidentifiable brand, or no creator
//! profiles at all — which must surface before the scoring core runs.

use std::path::Path;

use anyhow::Context;
use brandfit_core::{AppConfig, BrandProfile, CreatorProfile};
use brandfit_scoring::{rank_creators_for_brand_with_limits, score_brand_compatibility_with_limits};
use brandfit_scraper::ProfileClient;

use crate::report;
use crate::BrandArgs;

/// Resolve the brand to score against: a roster entry when `--brand` is
/// given, otherwise an ad-hoc brand from the category/tier flags.
fn resolve_brand(config: &AppConfig, args: &BrandArgs) -> anyhow::Result<BrandProfile> {
    let brand = if let Some(name) = args.brand.as_deref() {
        let roster = brandfit_core::load_brands(&config.brands_path)
            .with_context(|| format!("loading brand roster from {:?}", config.brands_path))?;
        let mut entry = roster
            .find(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("brand '{name}' not found in roster"))?;
        // CLI flags override roster values for one-off runs.
        if args.target_tier.is_some() {
            entry.target_tier.clone_from(&args.target_tier);
        }
        entry
    } else {
        BrandProfile {
            name: None,
            category: args.category.clone(),
            target_tier: args.target_tier.clone(),
        }
    };

    brand
        .ensure_identified()
        .context("pass --brand for a roster entry or --category for an ad-hoc brand")?;
    Ok(brand)
}

fn build_client(config: &AppConfig) -> anyhow::Result<ProfileClient> {
    let base_url = config.profile_api_url.as_deref().ok_or_else(|| {
        anyhow::anyhow!("BRANDFIT_PROFILE_API_URL is not set; use --input for offline profiles")
    })?;
    ProfileClient::new(
        base_url,
        config.profile_api_key.as_deref(),
        config.fetch_timeout_secs,
        &config.fetch_user_agent,
        config.fetch_max_retries,
        config.fetch_backoff_base_secs,
    )
    .context("building profile client")
}

fn read_input_file(path: &Path) -> anyhow::Result<Vec<CreatorProfile>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading creator input file {path:?}"))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing creator input file {path:?} as a JSON array"))
}

/// Load the creator profiles to evaluate.
///
/// With `--input`, profiles come from a local JSON array, filtered to the
/// requested usernames when any were named. Otherwise every username is
/// fetched from the profile service; partial results are acceptable,
/// empty results are not.
async fn load_creators(
    config: &AppConfig,
    usernames: &[String],
    input: Option<&Path>,
) -> anyhow::Result<Vec<CreatorProfile>> {
    let creators = if let Some(path) = input {
        let all = read_input_file(path)?;
        if usernames.is_empty() {
            all
        } else {
            all.into_iter()
                .filter(|c| usernames.iter().any(|u| u.eq_ignore_ascii_case(&c.username)))
                .collect()
        }
    } else {
        if usernames.is_empty() {
            anyhow::bail!("no creators requested; pass --creators or --input");
        }
        let client = build_client(config)?;
        tracing::info!(count = usernames.len(), "fetching creator profiles");
        client
            .fetch_profiles(usernames, config.fetch_max_concurrent)
            .await
    };

    if creators.is_empty() {
        anyhow::bail!("no creator profiles available to score");
    }
    Ok(creators)
}

pub(crate) async fn run_score(
    config: &AppConfig,
    brand_args: &BrandArgs,
    creator: &str,
    input: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let brand = resolve_brand(config, brand_args)?;
    let creators = load_creators(config, &[creator.to_string()], input).await?;
    let profile = creators
        .first()
        .ok_or_else(|| anyhow::anyhow!("no creator profiles available to score"))?;

    let result = score_brand_compatibility_with_limits(profile, &brand, &config.limits());
    tracing::info!(
        creator = %profile.username,
        brand = %brand.display_name(),
        score = result.overall_score,
        "scored creator"
    );

    if json {
        report::print_score_json(&profile.username, &result)?;
    } else {
        report::print_compatibility(&profile.username, &result);
    }
    Ok(())
}

pub(crate) async fn run_rank(
    config: &AppConfig,
    brand_args: &BrandArgs,
    usernames: &[String],
    input: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let brand = resolve_brand(config, brand_args)?;
    let creators = load_creators(config, usernames, input).await?;

    let ranking = rank_creators_for_brand_with_limits(&creators, &brand, &config.limits());
    tracing::info!(
        brand = %brand.display_name(),
        creators = ranking.ranked_creators.len(),
        "ranking complete"
    );

    if json {
        report::print_ranking_json(&ranking)?;
    } else {
        report::print_ranking(&ranking);
    }
    Ok(())
}

pub(crate) fn run_brands(config: &AppConfig) -> anyhow::Result<()> {
    let roster = brandfit_core::load_brands(&config.brands_path)
        .with_context(|| format!("loading brand roster from {:?}", config.brands_path))?;

    if roster.brands.is_empty() {
        println!("brand roster is empty");
        return Ok(());
    }

    for brand in &roster.brands {
        let category = brand.category.as_deref().unwrap_or("-");
        let tier = brand.target_tier.as_deref().unwrap_or("any");
        println!("{:<24} category: {category:<14} target tier: {tier}", brand.display_name());
    }
    Ok(())
}
