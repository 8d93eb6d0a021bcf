use serde::{Deserialize, Serialize};

/// Audience-size tier derived from a creator's follower count.
///
/// Totally ordered smallest to largest; the ordinal distance between two
/// tiers drives audience-fit scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Nano,
    Micro,
    #[serde(rename = "mid-tier")]
    MidTier,
    Macro,
    Mega,
}

impl Tier {
    /// Position on the 5-point ordered scale.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Tier::Nano => 0,
            Tier::Micro => 1,
            Tier::MidTier => 2,
            Tier::Macro => 3,
            Tier::Mega => 4,
        }
    }

    /// Absolute ordinal distance to another tier.
    #[must_use]
    pub fn distance(self, other: Tier) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }

    /// Parse one of the five lowercase tier labels.
    ///
    /// Returns `None` for anything else, including `"any"` — the caller
    /// decides what an absent constraint means.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "nano" => Some(Tier::Nano),
            "micro" => Some(Tier::Micro),
            "mid-tier" => Some(Tier::MidTier),
            "macro" => Some(Tier::Macro),
            "mega" => Some(Tier::Mega),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Nano => write!(f, "nano"),
            Tier::Micro => write!(f, "micro"),
            Tier::MidTier => write!(f, "mid-tier"),
            Tier::Macro => write!(f, "macro"),
            Tier::Mega => write!(f, "mega"),
        }
    }
}

/// Classify a follower count into its audience tier.
///
/// Breakpoints: <10k nano, <100k micro, <500k mid-tier, <1M macro,
/// otherwise mega. Engagement and audience-fit scoring both go through
/// this single implementation so the breakpoints cannot drift apart.
#[must_use]
pub fn classify_tier(followers: u64) -> Tier {
    if followers < 10_000 {
        Tier::Nano
    } else if followers < 100_000 {
        Tier::Micro
    } else if followers < 500_000 {
        Tier::MidTier
    } else if followers < 1_000_000 {
        Tier::Macro
    } else {
        Tier::Mega
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_partitions_exactly_at_breakpoints() {
        assert_eq!(classify_tier(0), Tier::Nano);
        assert_eq!(classify_tier(9_999), Tier::Nano);
        assert_eq!(classify_tier(10_000), Tier::Micro);
        assert_eq!(classify_tier(99_999), Tier::Micro);
        assert_eq!(classify_tier(100_000), Tier::MidTier);
        assert_eq!(classify_tier(499_999), Tier::MidTier);
        assert_eq!(classify_tier(500_000), Tier::Macro);
        assert_eq!(classify_tier(999_999), Tier::Macro);
        assert_eq!(classify_tier(1_000_000), Tier::Mega);
        assert_eq!(classify_tier(50_000_000), Tier::Mega);
    }

    #[test]
    fn classify_is_monotonic() {
        let counts = [0, 9_999, 10_000, 99_999, 100_000, 499_999, 500_000, 999_999, 1_000_000];
        for pair in counts.windows(2) {
            assert!(
                classify_tier(pair[0]) <= classify_tier(pair[1]),
                "tier regressed between {} and {} followers",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn parse_accepts_all_labels() {
        assert_eq!(Tier::parse("nano"), Some(Tier::Nano));
        assert_eq!(Tier::parse("micro"), Some(Tier::Micro));
        assert_eq!(Tier::parse("mid-tier"), Some(Tier::MidTier));
        assert_eq!(Tier::parse("macro"), Some(Tier::Macro));
        assert_eq!(Tier::parse("mega"), Some(Tier::Mega));
    }

    #[test]
    fn parse_rejects_any_and_unknown() {
        assert_eq!(Tier::parse("any"), None);
        assert_eq!(Tier::parse("huge"), None);
        assert_eq!(Tier::parse(""), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tier in [Tier::Nano, Tier::Micro, Tier::MidTier, Tier::Macro, Tier::Mega] {
            assert_eq!(Tier::parse(&tier.to_string()), Some(tier));
        }
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Tier::Nano.distance(Tier::Mega), 4);
        assert_eq!(Tier::Mega.distance(Tier::Nano), 4);
        assert_eq!(Tier::Micro.distance(Tier::MidTier), 1);
        assert_eq!(Tier::Macro.distance(Tier::Macro), 0);
    }

    #[test]
    fn serde_uses_lowercase_labels() {
        assert_eq!(serde_json::to_string(&Tier::MidTier).unwrap(), "\"mid-tier\"");
        assert_eq!(serde_json::to_string(&Tier::Nano).unwrap(), "\"nano\"");
        let parsed: Tier = serde_json::from_str("\"mega\"").unwrap();
        assert_eq!(parsed, Tier::Mega);
    }
}
