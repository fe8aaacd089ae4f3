//! Slug normalization for guide titles.
//!
//! A guide's slug is derived from its title and is the only key linking a
//! catalog record to a URL, so the transformation must stay byte-for-byte
//! stable:
//!
//! ```text
//! "Levi's Stadium & Caltrain"  →  "levis-stadium-and-caltrain"
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Characters that survive normalization (before whitespace collapsing).
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());

/// One or more whitespace characters.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Convert arbitrary text into a URL slug.
///
/// Steps, in order:
/// 1. lowercase
/// 2. `&` → `and`
/// 3. drop everything except `a-z`, `0-9`, whitespace and `-`
/// 4. trim
/// 5. whitespace runs → single `-`
///
/// Apostrophes (straight or curly) are dropped by step 3 like any other
/// punctuation. Total and idempotent.
///
/// Hyphens already in the input are kept as-is, so the output can contain
/// repeated or edge hyphens: `"A - B"` → `"a---b"`, `"-x-"` → `"-x-"`.
/// Published slugs were derived this way and must keep matching.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase().replace('&', "and");
    let stripped = DISALLOWED.replace_all(&lowered, "");
    WHITESPACE_RUN
        .replace_all(stripped.trim(), "-")
        .into_owned()
}

/// Heading text for a slug nobody has written a title for.
///
/// `"union-station-shuttle"` → `"Union Station Shuttle"`. Empty segments
/// (from doubled or edge hyphens) are skipped.
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
