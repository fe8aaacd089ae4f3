//! Display strings for navigation and headings.
//!
//! Some slugs deliberately show different copy than their catalog title:
//! the catalog keeps stale placeholder records alive for the alias table,
//! and a legacy slug must render the same heading as its replacement.

use super::alias::AliasPattern::{self, Exact, Prefix};
use super::{GuideRecord, alias, lookup, title_case};

const MIAMI_TITLE: &str =
    "Miami World Cup 2026: Your Complete Transportation Guide to Hard Rock Stadium";
const ARLINGTON_TITLE: &str = "Dallas World Cup 2026: Getting to AT&T Stadium in Arlington";
const BAY_AREA_TITLE: &str = "San Francisco Bay Area World Cup 2026: Getting to Levi's Stadium";
const NEW_YORK_NEW_JERSEY_TITLE: &str =
    "New York New Jersey World Cup 2026: NJ Transit to MetLife Stadium";

/// Slug → display string overrides. First matching entry wins.
///
/// Every legacy slug that shows another guide's content is listed here, so
/// its heading matches the content it renders.
pub static DISPLAY_OVERRIDES: &[(AliasPattern, &str)] = &[
    (Exact("budget-bus-travel-intercity-connections"), MIAMI_TITLE),
    (Exact(alias::MIAMI), MIAMI_TITLE),
    (Prefix("miami-gardens-world-cup-2026-"), MIAMI_TITLE),
    (Exact(alias::ARLINGTON), ARLINGTON_TITLE),
    (Exact("dallas-world-cup-2026-getting-to-atandt-stadium"), ARLINGTON_TITLE),
    (Exact(alias::BAY_AREA), BAY_AREA_TITLE),
    (Exact("bay-area-world-cup-2026-getting-to-levis-stadium"), BAY_AREA_TITLE),
    (Exact("santa-clara-levis-stadium-transportation"), BAY_AREA_TITLE),
    (Exact("east-rutherford-world-cup-2026-metlife-stadium"), NEW_YORK_NEW_JERSEY_TITLE),
    (
        Exact("philadelphia-world-cup-2026-getting-to-metlife-stadium"),
        NEW_YORK_NEW_JERSEY_TITLE,
    ),
];

/// Explicit override for `slug`, if any.
pub fn display_override(slug: &str) -> Option<&'static str> {
    if slug.is_empty() {
        return None;
    }
    DISPLAY_OVERRIDES
        .iter()
        .find(|(pattern, _)| pattern.matches(slug))
        .map(|(_, text)| *text)
}

/// Human-readable title for `slug`.
///
/// Resolution order: override table, then the matching catalog record's
/// title, then the title-cased slug. Pure.
pub fn display_title(slug: &str, catalog: &[GuideRecord]) -> String {
    if let Some(text) = display_override(slug) {
        return text.to_string();
    }
    match lookup(Some(slug), catalog) {
        Some(record) => record.title.to_string(),
        None => title_case(slug),
    }
}
