//! Legacy slug alias table.
//!
//! Old links must keep working after a guide is renamed. Each rule maps a
//! deprecated slug (or slug prefix) either to the slug that replaced it or
//! to [`AliasTarget::Retired`] when the content is gone.
//!
//! Rules are evaluated in declaration order and the first match wins, so a
//! more specific rule must be listed before a broader prefix rule.

use serde::Serialize;

/// How a rule matches the incoming slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AliasPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl AliasPattern {
    pub fn matches(&self, slug: &str) -> bool {
        match *self {
            Self::Exact(exact) => slug == exact,
            Self::Prefix(prefix) => slug.starts_with(prefix),
        }
    }
}

/// Where a legacy slug now points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "slug", rename_all = "lowercase")]
pub enum AliasTarget {
    /// Renamed: rewrite the address bar to this slug.
    Canonical(&'static str),
    /// Content removed: send the visitor to the not-found route.
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AliasRule {
    pub pattern: AliasPattern,
    pub target: AliasTarget,
}

const fn rename(from: &'static str, to: &'static str) -> AliasRule {
    AliasRule {
        pattern: AliasPattern::Exact(from),
        target: AliasTarget::Canonical(to),
    }
}

const fn rename_prefix(prefix: &'static str, to: &'static str) -> AliasRule {
    AliasRule {
        pattern: AliasPattern::Prefix(prefix),
        target: AliasTarget::Canonical(to),
    }
}

const fn retire(from: &'static str) -> AliasRule {
    AliasRule {
        pattern: AliasPattern::Exact(from),
        target: AliasTarget::Retired,
    }
}

pub const MIAMI: &str =
    "miami-world-cup-2026-your-complete-transportation-guide-to-hard-rock-stadium";
pub const ARLINGTON: &str = "arlington-world-cup-2026-getting-to-dallas-stadium";
pub const BAY_AREA: &str = "san-francisco-bay-area-world-cup-2026-getting-to-levis-stadium";
pub const NEW_YORK_NEW_JERSEY: &str =
    "new-york-new-jersey-world-cup-2026-nj-transit-to-metlife-stadium";

/// Ordered alias rules. Targets are reproduced as published, including ones
/// that point at a different city than the legacy slug names.
pub static ALIASES: &[AliasRule] = &[
    rename("budget-bus-travel-intercity-connections", MIAMI),
    retire("dallas-world-cup-2026-your-complete-transportation-guide-to-atandt-stadium"),
    rename("dallas-world-cup-2026-getting-to-atandt-stadium", ARLINGTON),
    rename("bay-area-world-cup-2026-getting-to-levis-stadium", BAY_AREA),
    rename("santa-clara-levis-stadium-transportation", BAY_AREA),
    rename("east-rutherford-world-cup-2026-metlife-stadium", NEW_YORK_NEW_JERSEY),
    rename("philadelphia-world-cup-2026-getting-to-metlife-stadium", NEW_YORK_NEW_JERSEY),
    rename_prefix("miami-gardens-world-cup-2026-", MIAMI),
];

/// First rule of the built-in table matching `slug`.
pub fn resolve_alias(slug: &str) -> Option<&'static AliasRule> {
    resolve_alias_in(slug, ALIASES)
}

/// First rule (declaration order) in `rules` matching `slug`. Later
/// matches are never consulted. An empty slug matches nothing.
pub fn resolve_alias_in<'a>(slug: &str, rules: &'a [AliasRule]) -> Option<&'a AliasRule> {
    if slug.is_empty() {
        return None;
    }
    rules.iter().find(|rule| rule.pattern.matches(slug))
}

/// Whether `slug` is the source of any alias rule.
pub fn is_legacy(slug: &str) -> bool {
    resolve_alias(slug).is_some()
}
