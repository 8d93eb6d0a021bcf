use serde::{Deserialize, Serialize};

/// A social-media creator profile as supplied by the profile source.
///
/// Only `username` and `followers` are semantically required; every other
/// field may be absent on the wire and defaults here. Missing optional
/// fields degrade scores gracefully rather than erroring.
///
/// `followers` is signed so that out-of-range input can be represented
/// and rejected by [`CreatorProfile::validate`] instead of failing at
/// deserialization time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatorProfile {
    pub username: String,
    pub nickname: Option<String>,
    pub bio: Option<String>,
    pub followers: i64,
    pub engagement_rate: Option<f64>,
    pub verified: Option<bool>,
    pub bio_link: Option<String>,
    pub bio_links: Vec<String>,
    pub commerce_user: Option<bool>,
    pub seller_flag: Option<bool>,
}

impl CreatorProfile {
    /// Whether the platform has verified this account.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }

    /// Whether either commerce signal is set on the account.
    #[must_use]
    pub fn is_commerce(&self) -> bool {
        self.commerce_user.unwrap_or(false) || self.seller_flag.unwrap_or(false)
    }

    /// Distinct external links on the profile: every non-empty entry of
    /// `bio_links`, plus `bio_link` when non-empty and not already listed.
    #[must_use]
    pub fn link_count(&self) -> usize {
        let mut count = self.bio_links.iter().filter(|l| !l.trim().is_empty()).count();
        if let Some(link) = self.bio_link.as_deref() {
            if !link.trim().is_empty() && !self.bio_links.iter().any(|l| l == link) {
                count += 1;
            }
        }
        count
    }

    /// Check the profile against the scoring invariants, collecting every
    /// violation instead of stopping at the first.
    ///
    /// A non-empty return marks the record invalid for scoring; the
    /// aggregator turns the collected strings into result flags. This is
    /// a recoverable per-record outcome, never a fatal error.
    #[must_use]
    pub fn validate(&self, limits: &ValidationLimits) -> Vec<String> {
        let mut errors = Vec::new();

        if self.followers < 0 {
            errors.push(format!("followers count is negative ({})", self.followers));
        } else if self.followers > limits.max_followers {
            errors.push(format!(
                "followers count {} exceeds maximum of {}",
                self.followers, limits.max_followers
            ));
        }

        if let Some(rate) = self.engagement_rate {
            if !(0.0..=100.0).contains(&rate) {
                errors.push(format!("engagement rate {rate} is outside the 0-100 range"));
            }
        }

        if let Some(bio) = self.bio.as_deref() {
            let len = bio.chars().count();
            if len > limits.max_bio_len {
                errors.push(format!(
                    "bio length {} exceeds maximum of {} characters",
                    len, limits.max_bio_len
                ));
            }
        }

        errors
    }
}

/// Bounds applied to incoming creator records before scoring.
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    pub max_followers: i64,
    pub max_bio_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_followers: 10_000_000_000,
            max_bio_len: 1_000,
        }
    }
}
