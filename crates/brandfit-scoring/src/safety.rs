//! Brand safety scoring.

use brandfit_core::CreatorProfile;

use crate::lexicon::{HIGH_RISK_KEYWORDS, MEDIUM_RISK_KEYWORDS, PRIOR_SPONSORSHIP_KEYWORDS};
use crate::matcher::{contains_keyword, profile_text};
use crate::types::{RiskLevel, SafetyScore};

/// Points deducted per high-risk keyword match.
const HIGH_RISK_DEDUCTION: usize = 30;
/// Points deducted per medium-risk keyword match.
const MEDIUM_RISK_DEDUCTION: usize = 15;

/// Scan the profile for risky content signals.
///
/// Deductions accumulate additively across all distinct matches and the
/// score floors at 0. Informational matches (prior sponsorship language)
/// are recorded but never deducted.
#[must_use]
pub fn score_brand_safety(creator: &CreatorProfile) -> SafetyScore {
    let text = profile_text(creator);

    let matches_in = |keywords: &[&str]| -> Vec<String> {
        keywords
            .iter()
            .filter(|k| contains_keyword(&text, k))
            .map(|k| (*k).to_string())
            .collect()
    };

    let high_risk_matches = matches_in(HIGH_RISK_KEYWORDS);
    let medium_risk_matches = matches_in(MEDIUM_RISK_KEYWORDS);
    let sponsorship_signals = matches_in(PRIOR_SPONSORSHIP_KEYWORDS);

    let deduction =
        HIGH_RISK_DEDUCTION * high_risk_matches.len() + MEDIUM_RISK_DEDUCTION * medium_risk_matches.len();
    let score = u8::try_from(100_usize.saturating_sub(deduction)).unwrap_or(0);

    let risk_level = if deduction > HIGH_RISK_DEDUCTION {
        RiskLevel::High
    } else if deduction > 0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let mut flags = Vec::new();
    for k in &high_risk_matches {
        flags.push(format!("High-risk keyword \"{k}\" found in profile"));
    }
    for k in &medium_risk_matches {
        flags.push(format!("Medium-risk keyword \"{k}\" found in profile"));
    }

    let message = if flags.is_empty() {
        "No brand safety concerns detected".to_string()
    } else {
        format!("{} brand safety flag(s) detected", flags.len())
    };

    SafetyScore {
        score,
        message,
        risk_level,
        flags,
        high_risk_matches,
        medium_risk_matches,
        sponsorship_signals,
    }
}
