//! Niche alignment scoring.

use brandfit_core::{BrandProfile, CreatorProfile};

use crate::lexicon::{compatible_niches, NICHE_KEYWORDS};
use crate::matcher::{contains_keyword, profile_text};
use crate::types::NicheScore;

/// Marker niche recorded for platform-verified creators.
const VERIFIED_NICHE: &str = "verified";

/// Extract the creator's niches from profile text.
///
/// Iterates the keyword table in its stable order; a niche is recorded at
/// most once, on its first matching keyword. Verified creators get the
/// `"verified"` marker niche appended idempotently.
#[must_use]
pub fn extract_niches(creator: &CreatorProfile) -> Vec<String> {
    let text = profile_text(creator);
    let mut niches: Vec<String> = NICHE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| contains_keyword(&text, k)))
        .map(|(niche, _)| (*niche).to_string())
        .collect();

    if creator.is_verified() && !niches.iter().any(|n| n == VERIFIED_NICHE) {
        niches.push(VERIFIED_NICHE.to_string());
    }

    niches
}

/// Loose bidirectional substring containment between niche labels.
///
/// Tolerates naming variants between category tables and the extraction
/// dictionary ("pop culture" vs "culture"). This is a deliberate
/// string-similarity heuristic, not a lemmatizer; exact matching would
/// regress coverage.
fn niches_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Score how well the creator's content niches align with the brand's
/// category.
#[must_use]
pub fn score_niche_alignment(creator: &CreatorProfile, brand: &BrandProfile) -> NicheScore {
    let compatible = brand
        .category
        .as_deref()
        .map_or(&[][..], |c| compatible_niches(&c.to_lowercase()));

    let detected = extract_niches(creator);
    let matched: Vec<String> = detected
        .iter()
        .filter(|n| compatible.iter().any(|c| niches_overlap(n, c)))
        .cloned()
        .collect();

    let (score, message) = if matched.len() >= 2 {
        (95, format!("Strong niche alignment: {}", matched.join(", ")))
    } else if matched.len() == 1 {
        (75, format!("Good niche alignment: {}", matched[0]))
    } else if detected.is_empty() {
        // Sparse profile, not a mismatch: distinguished from "no overlap"
        // so thin bios are not penalized as hard.
        (50, "Unable to determine creator niche from profile".to_string())
    } else {
        let shown: Vec<&str> = detected.iter().take(3).map(String::as_str).collect();
        (
            30,
            format!("Low niche alignment; detected niches: {}", shown.join(", ")),
        )
    };

    NicheScore {
        score,
        message,
        matched_niches: matched,
        detected_niches: detected,
    }
}
