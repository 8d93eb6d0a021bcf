//! Wire types for the profile scraping service.
//!
//! The service returns one JSON document per profile from
//! `GET /v1/profiles/{username}`. Everything beyond the username and the
//! follower count is optional on the wire; `#[serde(default)]` keeps
//! sparse profiles deserializable. Empty strings are normalized to `None`
//! in `normalize.rs`, not here.

use serde::Deserialize;

/// Profile payload returned by the scraping service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    /// Account handle, e.g. `"techsavvy"`.
    pub unique_id: String,

    /// Display name. May be absent or empty.
    #[serde(default)]
    pub nickname: Option<String>,

    /// Bio text; the service calls this `signature`.
    #[serde(default)]
    pub signature: Option<String>,

    /// Follower count as reported by the platform. Passed through signed
    /// so downstream validation owns the range check.
    #[serde(default)]
    pub follower_count: i64,

    /// Engagement rate percentage, when the service computed one.
    #[serde(default)]
    pub engagement_rate: Option<f64>,

    /// Platform verification badge.
    #[serde(default)]
    pub verified: Option<bool>,

    /// Primary bio link object.
    #[serde(default)]
    pub bio_link: Option<RawBioLink>,

    /// Additional bio links, newest first.
    #[serde(default)]
    pub bio_links: Vec<RawBioLink>,

    /// Commerce account metadata.
    #[serde(default)]
    pub commerce_user_info: Option<RawCommerceInfo>,

    /// Marketplace seller flag.
    #[serde(default)]
    pub seller: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RawBioLink {
    pub link: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommerceInfo {
    #[serde(default)]
    pub commerce_user: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_payload() {
        let json = r#"{
            "uniqueId": "techsavvy",
            "nickname": "Tech Savvy",
            "signature": "tech reviewer and gadget lover",
            "followerCount": 25000,
            "engagementRate": 6.0,
            "verified": true,
            "bioLink": {"link": "linktr.ee/x"},
            "bioLinks": [{"link": "shop.example.com"}],
            "commerceUserInfo": {"commerceUser": false},
            "seller": false
        }"#;
        let raw: RawProfile = serde_json::from_str(json).unwrap();
        assert_eq!(raw.unique_id, "techsavvy");
        assert_eq!(raw.follower_count, 25_000);
        assert_eq!(raw.bio_link.unwrap().link, "linktr.ee/x");
        assert_eq!(raw.bio_links.len(), 1);
        assert_eq!(raw.commerce_user_info.unwrap().commerce_user, Some(false));
    }

    #[test]
    fn sparse_payload_defaults() {
        let raw: RawProfile = serde_json::from_str(r#"{"uniqueId": "ghost"}"#).unwrap();
        assert_eq!(raw.unique_id, "ghost");
        assert_eq!(raw.follower_count, 0);
        assert!(raw.nickname.is_none());
        assert!(raw.bio_link.is_none());
        assert!(raw.bio_links.is_empty());
        assert!(raw.commerce_user_info.is_none());
    }
}
