//! `[guides]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [guides]
//! section = "/transportation"    # Route prefix for guide pages
//! not_found = "/404"             # Where retired slugs are sent
//! generic_description = "..."    # Meta description for unknown slugs
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::redirect::RoutePaths;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidesConfig {
    /// Route prefix for guide pages.
    pub section: String,

    /// Route retired slugs are redirected to.
    pub not_found: String,

    /// Label of the section in breadcrumbs.
    pub section_label: String,

    /// Description used when no guide supplies one.
    pub generic_description: String,
}

pub struct GuidesFields {
    pub section: FieldPath,
    pub not_found: FieldPath,
}

impl GuidesConfig {
    pub const FIELDS: GuidesFields = GuidesFields {
        section: FieldPath::new("guides.section"),
        not_found: FieldPath::new("guides.not_found"),
    };

    pub fn routes(&self) -> RoutePaths {
        RoutePaths::new(self.section.clone(), self.not_found.clone())
    }

    /// Validate route settings.
    ///
    /// # Checks
    /// - `section` and `not_found` are absolute paths
    /// - `not_found` is not inside `section` (a retired slug would loop)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.section, &self.section),
            (Self::FIELDS.not_found, &self.not_found),
        ] {
            if !value.starts_with('/') {
                diag.error_with_hint(
                    field,
                    format!("route '{}' must start with '/'", value),
                    format!("use e.g. \"/{}\"", value.trim_start_matches('/')),
                );
            }
        }

        let section = self.section.trim_end_matches('/');
        if !section.is_empty() && self.not_found.starts_with(&format!("{section}/")) {
            diag.error(
                Self::FIELDS.not_found,
                format!("not-found route must live outside {}", section),
            );
        }
    }
}

impl Default for GuidesConfig {
    fn default() -> Self {
        Self {
            section: "/transportation".into(),
            not_found: "/404".into(),
            section_label: "Transportation".into(),
            generic_description: "Trains, transit, shuttles and parking for World Cup 2026 host cities.".into(),
        }
    }
}
