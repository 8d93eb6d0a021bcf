//! Word-boundary keyword detection over profile text.

use brandfit_core::CreatorProfile;

/// Lowercased bio and nickname joined with a single space.
///
/// The non-alphanumeric separator guarantees the end of one field and the
/// start of the next can never fuse into a spurious token.
#[must_use]
pub fn profile_text(creator: &CreatorProfile) -> String {
    let bio = creator.bio.as_deref().unwrap_or("");
    let nickname = creator.nickname.as_deref().unwrap_or("");
    format!("{bio} {nickname}").to_lowercase()
}

fn is_boundary(c: Option<char>) -> bool {
    c.is_none_or(|c| !c.is_alphanumeric())
}

/// True when `keyword` occurs in `haystack` at word boundaries.
///
/// The characters adjacent to the match, when present, must be
/// non-alphanumeric: "sandal" does not fire inside "sandals", and
/// "scandal" is not found in "sandal". Multi-word keywords ("hip hop",
/// "how to") are matched literally including internal spaces, with
/// boundaries checked only at the outer edges.
///
/// `haystack` is expected to be lowercased already (see [`profile_text`]);
/// lexicon keywords are stored lowercase.
#[must_use]
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(keyword) {
        let start = search_from + offset;
        let end = start + keyword.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        if is_boundary(before) && is_boundary(after) {
            return true;
        }
        // Step over one char (not one byte) to stay on a UTF-8 boundary.
        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        search_from = start + step;
    }
    false
}
