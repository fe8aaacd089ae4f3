//! Legacy slug redirects.
//!
//! A page view whose slug is stale gets exactly one correction:
//! - renamed guide: the address bar is rewritten to the canonical slug
//!   (history *replace*, no new entry, no reload);
//! - retired guide: the visitor is sent to the not-found route, also with
//!   replace semantics.
//!
//! The correction never changes what the current render shows.
//!
//! # Module Structure
//!
//! ```text
//! redirect/
//! ├── navigator   # Navigator trait, MemoryHistory, ScriptNavigator
//! └── mod.rs      # RoutePaths, RedirectAction, Redirector (this file)
//! ```

mod navigator;

pub use navigator::{NavigateOptions, Navigator, ScriptNavigator};

#[cfg(test)]
pub use navigator::MemoryHistory;

use crate::guide::{AliasRule, AliasTarget, SlugTable};
use serde::Serialize;

/// Route prefixes the redirector builds paths from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    /// Guide section, e.g. `/transportation`.
    pub section: String,
    /// Where retired slugs are sent.
    pub not_found: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            section: "/transportation".into(),
            not_found: "/404".into(),
        }
    }
}

impl RoutePaths {
    pub fn new(section: impl Into<String>, not_found: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            not_found: not_found.into(),
        }
    }

    /// `/transportation/<slug>`
    pub fn guide_path(&self, slug: &str) -> String {
        format!("{}/{}", self.section.trim_end_matches('/'), slug)
    }

    /// Extract the slug from a request path under the guide section.
    ///
    /// Returns `None` for paths outside the section. `/transportation` and
    /// `/transportation/` yield an empty slug.
    pub fn slug_from_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        let section = self.section.trim_end_matches('/');
        let rest = path.strip_prefix(section)?;
        if rest.is_empty() {
            return Some("");
        }
        let rest = rest.strip_prefix('/')?;
        let slug = rest.trim_end_matches('/');
        // Nested paths are not guide routes
        (!slug.contains('/')).then_some(slug)
    }
}

/// The single correction applied for a stale slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum RedirectAction {
    /// Rewrite the current history entry in place.
    Canonicalize { path: String },
    /// Leave for the not-found route, replacing the current entry.
    NotFound { path: String },
}

impl RedirectAction {
    pub fn for_rule(rule: &AliasRule, paths: &RoutePaths) -> Self {
        match rule.target {
            AliasTarget::Canonical(slug) => Self::Canonicalize {
                path: paths.guide_path(slug),
            },
            AliasTarget::Retired => Self::NotFound {
                path: paths.not_found.clone(),
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Canonicalize { path } | Self::NotFound { path } => path,
        }
    }

    /// Apply through a navigation service.
    pub fn apply<N: Navigator + ?Sized>(&self, nav: &mut N) {
        match self {
            Self::Canonicalize { path } => nav.replace_current_url(path),
            Self::NotFound { path } => nav.navigate_to(path, NavigateOptions { replace: true }),
        }
    }
}

/// Correction for `slug`, if it is stale. Pure.
pub fn redirect_for(slug: &str, paths: &RoutePaths) -> Option<RedirectAction> {
    SlugTable::global()
        .entry(slug)
        .redirect
        .map(|rule| RedirectAction::for_rule(rule, paths))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum RedirectState {
    #[default]
    Idle,
    Checked {
        slug: String,
    },
}

/// Post-render redirect check, keyed on the current slug.
///
/// `check` evaluates a slug once: calling it again with the same slug does
/// nothing, a different slug is evaluated afresh. A pending correction for
/// a previous slug can therefore never land on a new one.
#[derive(Debug, Default)]
pub struct Redirector {
    state: RedirectState,
}

impl Redirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug of the last check, if any.
    pub fn checked_slug(&self) -> Option<&str> {
        match &self.state {
            RedirectState::Idle => None,
            RedirectState::Checked { slug } => Some(slug),
        }
    }

    /// Evaluate `slug` and apply its correction through `nav`.
    ///
    /// Returns the applied action, or `None` when the slug is current or was
    /// already checked.
    pub fn check<N: Navigator + ?Sized>(
        &mut self,
        slug: Option<&str>,
        paths: &RoutePaths,
        nav: &mut N,
    ) -> Option<RedirectAction> {
        let slug = slug.unwrap_or_default();
        if self.checked_slug() == Some(slug) {
            return None;
        }
        self.state = RedirectState::Checked {
            slug: slug.to_string(),
        };

        let action = redirect_for(slug, paths)?;
        crate::debug!("redirect"; "{} -> {}", slug, action.path());
        action.apply(nav);
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET_BUS: &str = "budget-bus-travel-intercity-connections";
    const MIAMI: &str = "miami-world-cup-2026-your-complete-transportation-guide-to-hard-rock-stadium";
    const DALLAS_ATT: &str =
        "dallas-world-cup-2026-your-complete-transportation-guide-to-atandt-stadium";

    fn history_at(slug: &str) -> MemoryHistory {
        MemoryHistory::new(RoutePaths::default().guide_path(slug))
    }

    #[test]
    fn test_guide_path() {
        let paths = RoutePaths::new("/transportation/", "/404");
        assert_eq!(paths.guide_path("abc"), "/transportation/abc");
    }

    #[test]
    fn test_slug_from_path() {
        let paths = RoutePaths::default();
        assert_eq!(paths.slug_from_path("/transportation/abc"), Some("abc"));
        assert_eq!(paths.slug_from_path("/transportation/abc/"), Some("abc"));
        assert_eq!(paths.slug_from_path("/transportation/"), Some(""));
        assert_eq!(paths.slug_from_path("/transportation"), Some(""));
        assert_eq!(paths.slug_from_path("/transportationx/abc"), None);
        assert_eq!(paths.slug_from_path("/transportation/a/b"), None);
        assert_eq!(paths.slug_from_path("/stadiums/abc"), None);
    }

    #[test]
    fn test_redirect_target_for_legacy_slug() {
        let action = redirect_for(BUDGET_BUS, &RoutePaths::default()).unwrap();
        assert_eq!(
            action,
            RedirectAction::Canonicalize {
                path: format!("/transportation/{MIAMI}")
            }
        );
    }

    #[test]
    fn test_retired_slug_goes_to_not_found_with_replace() {
        let mut history = MemoryHistory::new("/transportation");
        history.push(RoutePaths::default().guide_path(DALLAS_ATT));
        assert_eq!(history.len(), 2);

        let action = Redirector::new()
            .check(Some(DALLAS_ATT), &RoutePaths::default(), &mut history)
            .unwrap();

        assert_eq!(action, RedirectAction::NotFound { path: "/404".into() });
        assert_eq!(history.current(), "/404");
        // Replaced, not pushed
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_custom_not_found_route() {
        let paths = RoutePaths::new("/transportation", "/not-found");
        let action = redirect_for(DALLAS_ATT, &paths).unwrap();
        assert_eq!(action.path(), "/not-found");
    }

    #[test]
    fn test_check_is_idempotent_per_slug() {
        let paths = RoutePaths::default();
        let mut history = history_at(BUDGET_BUS);
        let mut redirector = Redirector::new();

        assert!(redirector.check(Some(BUDGET_BUS), &paths, &mut history).is_some());
        assert!(redirector.check(Some(BUDGET_BUS), &paths, &mut history).is_none());

        assert_eq!(history.len(), 1);
        assert_eq!(history.writes(), 1);
        assert_eq!(history.current(), paths.guide_path(MIAMI));
    }

    #[test]
    fn test_repeated_replace_is_invisible() {
        // Even a fresh redirector (e.g. remount) leaves no extra trace
        let paths = RoutePaths::default();
        let mut history = history_at(BUDGET_BUS);
        Redirector::new().check(Some(BUDGET_BUS), &paths, &mut history);
        Redirector::new().check(Some(BUDGET_BUS), &paths, &mut history);
        assert_eq!(history.len(), 1);
        assert_eq!(history.writes(), 1);
    }

    #[test]
    fn test_slug_change_is_reevaluated() {
        let paths = RoutePaths::default();
        let mut history = history_at(MIAMI);
        let mut redirector = Redirector::new();

        assert!(redirector.check(Some(MIAMI), &paths, &mut history).is_none());
        assert_eq!(redirector.checked_slug(), Some(MIAMI));

        history.push(paths.guide_path(BUDGET_BUS));
        let action = redirector.check(Some(BUDGET_BUS), &paths, &mut history);
        assert!(matches!(action, Some(RedirectAction::Canonicalize { .. })));
        assert_eq!(redirector.checked_slug(), Some(BUDGET_BUS));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_current_and_unknown_slugs_do_nothing() {
        let paths = RoutePaths::default();
        for slug in [Some(MIAMI), Some("totally-unknown-slug"), Some(""), None] {
            let mut history = MemoryHistory::new("/transportation/x");
            assert!(Redirector::new().check(slug, &paths, &mut history).is_none());
            assert_eq!(history.writes(), 0);
        }
    }
}
