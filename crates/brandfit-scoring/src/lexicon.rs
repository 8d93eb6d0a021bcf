//! Static lookup tables for the scoring engine.
//!
//! Compiled into the binary as consts and never mutated at runtime. All
//! keywords are lowercase single words or space-separated phrases; the
//! matcher handles case by lowercasing profile text once.

use brandfit_core::Tier;

/// Niche keyword dictionary.
///
/// Keys are niche labels; values are the keywords whose word-boundary
/// presence in profile text assigns the niche. Table order is stable so
/// extracted niche lists are deterministic across runs.
pub(crate) const NICHE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "tech",
        &[
            "tech",
            "technology",
            "gadget",
            "gadgets",
            "software",
            "coding",
            "programmer",
            "developer",
            "unboxing",
        ],
    ),
    (
        "beauty",
        &["beauty", "makeup", "skincare", "cosmetics", "hairstylist", "nails"],
    ),
    (
        "fashion",
        &["fashion", "style", "outfit", "ootd", "streetwear", "thrift"],
    ),
    (
        "fitness",
        &["fitness", "gym", "workout", "trainer", "yoga", "bodybuilding"],
    ),
    (
        "food",
        &["food", "foodie", "cooking", "recipes", "chef", "baking", "restaurant"],
    ),
    (
        "travel",
        &["travel", "traveler", "wanderlust", "backpacking", "adventure"],
    ),
    (
        "gaming",
        &["gaming", "gamer", "esports", "streamer", "twitch", "speedrun"],
    ),
    (
        "music",
        &["music", "musician", "singer", "songwriter", "producer", "dj", "hip hop", "rapper"],
    ),
    (
        "comedy",
        &["comedy", "comedian", "funny", "humor", "skits", "memes"],
    ),
    (
        "education",
        &["education", "teacher", "tutorial", "how to", "study", "science"],
    ),
    (
        "finance",
        &["finance", "investing", "stocks", "entrepreneur", "business", "crypto"],
    ),
    (
        "lifestyle",
        &["lifestyle", "vlog", "vlogger", "daily life", "wellness", "minimalism"],
    ),
    (
        "sports",
        &["sports", "athlete", "football", "basketball", "soccer", "running"],
    ),
    ("pets", &["pets", "dog", "cat", "puppy", "kitten", "animal"]),
    (
        "parenting",
        &["parenting", "mom", "dad", "family", "toddler", "baby"],
    ),
    ("art", &["art", "artist", "drawing", "painting", "illustration", "design"]),
    ("dance", &["dance", "dancer", "choreography", "ballet"]),
];

/// Brand category → compatible creator niches.
///
/// Keys are lowercase category labels as supplied by brand records.
/// Overlap against extracted niches is a loose bidirectional substring
/// test, so entries tolerate naming variants of the niche labels above.
pub(crate) const CATEGORY_NICHES: &[(&str, &[&str])] = &[
    ("technology", &["tech", "gaming", "education", "finance"]),
    ("beauty", &["beauty", "fashion", "lifestyle"]),
    ("fashion", &["fashion", "beauty", "lifestyle", "dance"]),
    ("food", &["food", "lifestyle", "travel", "fitness"]),
    ("fitness", &["fitness", "sports", "food", "lifestyle"]),
    ("gaming", &["gaming", "tech", "comedy"]),
    ("travel", &["travel", "lifestyle", "food", "art"]),
    ("finance", &["finance", "education", "tech"]),
    ("education", &["education", "tech", "finance", "parenting"]),
    ("entertainment", &["comedy", "music", "dance", "gaming"]),
    ("music", &["music", "dance", "lifestyle"]),
    ("sports", &["sports", "fitness", "gaming"]),
    ("pets", &["pets", "lifestyle", "comedy"]),
    ("parenting", &["parenting", "food", "education", "lifestyle"]),
    ("home", &["lifestyle", "art", "parenting"]),
    ("automotive", &["tech", "sports", "lifestyle"]),
];

/// High-risk keywords. Each match deducts 30 points from the safety score
/// and forces an "avoid" recommendation regardless of the other scores.
pub(crate) const HIGH_RISK_KEYWORDS: &[&str] = &[
    "scandal",
    "arrested",
    "lawsuit",
    "fraud",
    "scam",
    "racist",
    "racism",
    "hate speech",
    "assault",
    "nsfw",
    "onlyfans",
    "drugs",
];

/// Medium-risk keywords. Each match deducts 15 points.
pub(crate) const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "controversy",
    "controversial",
    "drama",
    "exposed",
    "feud",
    "cancelled",
    "canceled",
    "gambling",
    "casino",
    "vape",
    "vaping",
    "clickbait",
];

/// Informational keywords: evidence of prior sponsorship work. Recorded
/// as metadata, never deducted — a positive-neutral fact.
pub(crate) const PRIOR_SPONSORSHIP_KEYWORDS: &[&str] = &[
    "sponsored",
    "ad",
    "ads",
    "partner",
    "partnership",
    "collab",
    "brand deal",
    "ambassador",
    "promo",
];

/// Engagement-rate thresholds (percent) for one tier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EngagementThresholds {
    pub excellent: f64,
    pub good: f64,
    pub acceptable: f64,
}

/// Threshold table keyed by tier. Smaller audiences are held to stricter
/// rates: engagement naturally declines as follower counts grow.
pub(crate) fn engagement_thresholds(tier: Tier) -> EngagementThresholds {
    match tier {
        Tier::Nano => EngagementThresholds {
            excellent: 8.0,
            good: 6.0,
            acceptable: 4.0,
        },
        Tier::Micro => EngagementThresholds {
            excellent: 7.0,
            good: 5.0,
            acceptable: 3.0,
        },
        Tier::MidTier => EngagementThresholds {
            excellent: 5.0,
            good: 3.5,
            acceptable: 2.0,
        },
        Tier::Macro => EngagementThresholds {
            excellent: 4.0,
            good: 2.5,
            acceptable: 1.5,
        },
        Tier::Mega => EngagementThresholds {
            excellent: 3.0,
            good: 2.0,
            acceptable: 1.0,
        },
    }
}

/// Compatible niches for a lowercased brand category.
///
/// Unknown or missing categories yield an empty set, which the niche
/// scorer treats as "no overlap possible".
pub(crate) fn compatible_niches(category: &str) -> &'static [&'static str] {
    CATEGORY_NICHES
        .iter()
        .find(|(key, _)| *key == category)
        .map_or(&[], |(_, niches)| niches)
}
