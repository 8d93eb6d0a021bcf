//! Sponsorship readiness scoring.

use brandfit_core::CreatorProfile;

use crate::types::SponsorshipScore;

/// Score the creator's readiness for paid brand work.
///
/// Signals are evaluated by priority; the first matching rule wins. The
/// branch set is exhaustive over the boolean signal combinations, so the
/// "unknown history" base of 50 from the scoring rubric can never
/// surface; the final arm covers the all-absent case at 40.
#[must_use]
pub fn score_sponsorship_history(creator: &CreatorProfile) -> SponsorshipScore {
    let verified = creator.is_verified();
    let links = creator.link_count();

    let (score, message) = if creator.is_commerce() {
        (95, "Commerce account: proven monetization infrastructure")
    } else if verified && links >= 2 {
        (90, "Verified with multiple links: highly brand-ready")
    } else if verified && links >= 1 {
        (80, "Verified with external link: professional intent")
    } else if links >= 1 {
        (65, "External link present: some sponsorship readiness")
    } else if verified {
        (60, "Verified but minimal external setup")
    } else {
        (40, "Limited professional setup")
    };

    SponsorshipScore {
        score,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator() -> CreatorProfile {
        CreatorProfile {
            username: "test".to_string(),
            followers: 10_000,
            ..CreatorProfile::default()
        }
    }

    #[test]
    fn commerce_account_wins_over_everything() {
        let mut c = creator();
        c.commerce_user = Some(true);
        c.verified = Some(true);
        c.bio_links = vec!["a.example.com".to_string(), "b.example.com".to_string()];
        assert_eq!(score_sponsorship_history(&c).score, 95);
    }

    #[test]
    fn seller_flag_counts_as_commerce() {
        let mut c = creator();
        c.seller_flag = Some(true);
        assert_eq!(score_sponsorship_history(&c).score, 95);
    }

    #[test]
    fn verified_with_two_links() {
        let mut c = creator();
        c.verified = Some(true);
        c.bio_links = vec!["a.example.com".to_string(), "b.example.com".to_string()];
        assert_eq!(score_sponsorship_history(&c).score, 90);
    }

    #[test]
    fn verified_with_one_link() {
        let mut c = creator();
        c.verified = Some(true);
        c.bio_link = Some("linktr.ee/x".to_string());
        assert_eq!(score_sponsorship_history(&c).score, 80);
    }

    #[test]
    fn link_without_verification() {
        let mut c = creator();
        c.bio_link = Some("linktr.ee/x".to_string());
        assert_eq!(score_sponsorship_history(&c).score, 65);
    }

    #[test]
    fn verified_without_links() {
        let mut c = creator();
        c.verified = Some(true);
        assert_eq!(score_sponsorship_history(&c).score, 60);
    }

    #[test]
    fn nothing_set_scores_lowest() {
        let result = score_sponsorship_history(&creator());
        assert_eq!(result.score, 40);
        assert!(result.message.contains("Limited"));
    }

    #[test]
    fn bio_link_duplicated_in_bio_links_counts_once() {
        let mut c = creator();
        c.verified = Some(true);
        c.bio_link = Some("linktr.ee/x".to_string());
        c.bio_links = vec!["linktr.ee/x".to_string()];
        // One distinct link, not two.
        assert_eq!(score_sponsorship_history(&c).score, 80);
    }
}
