//! Normalization from raw service payloads to [`CreatorProfile`].

use brandfit_core::CreatorProfile;

use crate::types::RawProfile;

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Convert a raw service payload into the domain profile record.
///
/// Empty or whitespace-only strings are treated as absent; link objects
/// collapse to their URL strings. The follower count passes through
/// unchecked — range validation happens at scoring time.
#[must_use]
pub fn normalize_profile(raw: RawProfile) -> CreatorProfile {
    let commerce_user = raw.commerce_user_info.and_then(|info| info.commerce_user);

    CreatorProfile {
        username: raw.unique_id,
        nickname: raw.nickname.and_then(non_empty),
        bio: raw.signature.and_then(non_empty),
        followers: raw.follower_count,
        engagement_rate: raw.engagement_rate,
        verified: raw.verified,
        bio_link: raw.bio_link.map(|l| l.link).and_then(non_empty),
        bio_links: raw
            .bio_links
            .into_iter()
            .filter_map(|l| non_empty(l.link))
            .collect(),
        commerce_user,
        seller_flag: raw.seller,
    }
}
