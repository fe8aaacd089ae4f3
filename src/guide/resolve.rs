//! Unified slug resolution.
//!
//! [`SlugTable`] folds the catalog, the display overrides and the alias table
//! into one map built on first use. Every page view goes through
//! [`resolve`], which reads the table and falls back to the same rules for
//! slugs the table has never seen.

use super::{
    AliasRule, AliasTarget, CATALOG, GuideRecord, alias, display, lookup_indexed, normalize,
};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::LazyLock;

/// Which block of content the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum ContentVariant {
    /// Catalog record at this index.
    Guide(usize),
    /// No dedicated content: generic heading and description.
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugEntry {
    pub display_title: String,
    pub variant: ContentVariant,
    pub redirect: Option<&'static AliasRule>,
}

/// Precomputed resolution for every slug the tables mention.
pub struct SlugTable {
    catalog: &'static [GuideRecord],
    entries: FxHashMap<String, SlugEntry>,
}

static TABLE: LazyLock<SlugTable> = LazyLock::new(|| SlugTable::build(CATALOG));

impl SlugTable {
    /// Shared table over the built-in catalog.
    pub fn global() -> &'static Self {
        &TABLE
    }

    pub fn build(catalog: &'static [GuideRecord]) -> Self {
        let keys = catalog
            .iter()
            .map(|record| normalize(record.title))
            .chain(
                display::DISPLAY_OVERRIDES
                    .iter()
                    .map(|(pattern, _)| *pattern)
                    .chain(alias::ALIASES.iter().map(|rule| rule.pattern))
                    .filter_map(|pattern| match pattern {
                        alias::AliasPattern::Exact(slug) => Some(slug.to_string()),
                        alias::AliasPattern::Prefix(_) => None,
                    }),
            )
            .filter(|slug| !slug.is_empty());

        let mut entries = FxHashMap::default();
        for slug in keys {
            if !entries.contains_key(&slug) {
                let entry = compute_entry(&slug, catalog);
                entries.insert(slug, entry);
            }
        }

        Self { catalog, entries }
    }

    pub fn catalog(&self) -> &'static [GuideRecord] {
        self.catalog
    }

    /// Entry for `slug`, computed on the fly when the table has none.
    pub fn entry(&self, slug: &str) -> SlugEntry {
        match self.entries.get(slug) {
            Some(entry) => entry.clone(),
            None => compute_entry(slug, self.catalog),
        }
    }

    /// Whether the table has a precomputed entry for `slug`.
    #[cfg(test)]
    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn compute_entry(slug: &str, catalog: &[GuideRecord]) -> SlugEntry {
    let redirect = alias::resolve_alias(slug);
    let own = lookup_indexed(Some(slug), catalog).map(|(index, _)| index);

    // A renamed slug shows its replacement's content
    let variant = match redirect.map(|rule| rule.target) {
        Some(AliasTarget::Canonical(target)) => lookup_indexed(Some(target), catalog)
            .map(|(index, _)| index)
            .or(own),
        _ => own,
    }
    .map_or(ContentVariant::Generic, ContentVariant::Guide);

    SlugEntry {
        display_title: display::display_title(slug, catalog),
        variant,
        redirect,
    }
}

/// Everything a page view needs to know about its slug.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub slug: String,
    /// Catalog record whose title matches the slug itself.
    pub guide: Option<GuideRecord>,
    pub display_title: String,
    pub variant: ContentVariant,
    pub redirect: Option<AliasRule>,
    /// Teaser of the record selected by `variant`.
    #[serde(skip)]
    intro: Option<&'static str>,
}

impl Resolution {
    /// Meta description, or `generic` when no record supplies one.
    pub fn description(&self, generic: &str) -> String {
        match self.intro {
            Some(intro) if !intro.is_empty() => intro.to_string(),
            _ => generic.to_string(),
        }
    }

    /// Record selected by `variant`.
    pub fn content_record(&self, catalog: &[GuideRecord]) -> Option<GuideRecord> {
        match self.variant {
            ContentVariant::Guide(index) => catalog.get(index).copied(),
            ContentVariant::Generic => None,
        }
    }

    /// Slug the address bar should show: the alias target for renamed slugs,
    /// the slug itself otherwise.
    pub fn canonical_slug(&self) -> &str {
        match self.redirect.map(|rule| rule.target) {
            Some(AliasTarget::Canonical(target)) => target,
            _ => &self.slug,
        }
    }

    pub fn is_retired(&self) -> bool {
        matches!(
            self.redirect.map(|rule| rule.target),
            Some(AliasTarget::Retired)
        )
    }
}

/// Resolve the current route slug against the global table.
pub fn resolve(slug: Option<&str>) -> Resolution {
    resolve_with(SlugTable::global(), slug)
}

pub fn resolve_with(table: &SlugTable, slug: Option<&str>) -> Resolution {
    let slug = slug.unwrap_or_default();
    let entry = table.entry(slug);
    let catalog = table.catalog();

    let intro = match entry.variant {
        ContentVariant::Guide(index) => catalog.get(index).map(|record| record.intro),
        ContentVariant::Generic => None,
    };

    Resolution {
        slug: slug.to_string(),
        guide: lookup_indexed(Some(slug), catalog).map(|(_, record)| *record),
        display_title: entry.display_title,
        variant: entry.variant,
        redirect: entry.redirect.copied(),
        intro,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::resolve_alias;
    use display::display_title;
    use crate::redirect::{MemoryHistory, RedirectAction, Redirector, RoutePaths};

    const GENERIC: &str = "Getting around World Cup 2026 host cities.";

    #[test]
    fn test_table_agrees_with_individual_resolvers() {
        let table = SlugTable::global();
        assert!(table.len() >= CATALOG.len());
        for slug in table.entries.keys() {
            let entry = table.entry(slug);
            assert_eq!(entry.display_title, display_title(slug, CATALOG), "{slug}");
            assert_eq!(entry.redirect, resolve_alias(slug), "{slug}");
        }
    }

    #[test]
    fn test_resolve_canonical_guide() {
        let r = resolve(Some(alias::MIAMI));
        assert_eq!(r.guide.unwrap().title, CATALOG[1].title);
        assert_eq!(r.variant, ContentVariant::Guide(1));
        assert!(r.redirect.is_none());
        assert_eq!(r.canonical_slug(), alias::MIAMI);
        assert_eq!(r.description(GENERIC), CATALOG[1].intro);
    }

    #[test]
    fn test_resolve_legacy_slug_keeps_original_slug() {
        let r = resolve(Some("budget-bus-travel-intercity-connections"));
        assert_eq!(r.slug, "budget-bus-travel-intercity-connections");
        // Stale placeholder record still matches the slug
        assert_eq!(r.guide.unwrap().title, "Budget Bus Travel: Intercity Connections");
        // ...but the page shows the replacement's copy
        assert_eq!(r.variant, ContentVariant::Guide(1));
        assert_eq!(r.display_title, CATALOG[1].title);
        assert_eq!(r.canonical_slug(), alias::MIAMI);
        assert!(!r.is_retired());
    }

    #[test]
    fn test_resolve_prefix_alias_not_in_table() {
        let table = SlugTable::global();
        let slug = "miami-gardens-world-cup-2026-parking";
        assert!(!table.contains(slug));
        let r = resolve(Some(slug));
        assert_eq!(r.variant, ContentVariant::Guide(1));
        assert_eq!(r.canonical_slug(), alias::MIAMI);
        assert_eq!(r.display_title, CATALOG[1].title);
    }

    #[test]
    fn test_resolve_retired() {
        let r = resolve(Some(
            "dallas-world-cup-2026-your-complete-transportation-guide-to-atandt-stadium",
        ));
        assert!(r.is_retired());
        assert_eq!(r.variant, ContentVariant::Guide(2));
    }

    #[test]
    fn test_resolve_unknown_and_empty() {
        let r = resolve(Some("totally-unknown-slug"));
        assert!(r.guide.is_none());
        assert_eq!(r.variant, ContentVariant::Generic);
        assert_eq!(r.display_title, "Totally Unknown Slug");
        assert_eq!(r.description(GENERIC), GENERIC);
        assert!(r.content_record(CATALOG).is_none());

        let r = resolve(None);
        assert_eq!(r.slug, "");
        assert_eq!(r.display_title, "");
        assert_eq!(r.variant, ContentVariant::Generic);
        assert!(r.redirect.is_none());
    }

    #[test]
    fn test_page_view_flow() {
        // Old link: content renders, address bar is corrected once
        let paths = RoutePaths::default();
        let mut history = MemoryHistory::new("/transportation/budget-bus-travel-intercity-connections");
        let mut redirector = Redirector::new();

        let r = resolve(Some("budget-bus-travel-intercity-connections"));
        let action = redirector.check(Some(&r.slug), &paths, &mut history);
        assert_eq!(
            action,
            Some(RedirectAction::Canonicalize {
                path: format!("/transportation/{}", alias::MIAMI)
            })
        );
        // Rendered content is unchanged by the correction
        assert_eq!(r.variant, ContentVariant::Guide(1));
        assert_eq!(history.current(), format!("/transportation/{}", alias::MIAMI));
        assert_eq!(history.len(), 1);

        // Re-render with the same slug: nothing else happens
        assert!(redirector.check(Some(&r.slug), &paths, &mut history).is_none());
        assert_eq!(history.len(), 1);
    }
}
