//! `[site]` section configuration.
//!
//! Site identity used by the SEO and structured-data emitters.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Stadium Travel"
//! url = "https://example.com"
//! language = "en"
//! description = "Matchday travel guides"
//! default_image = "/images/og-default.webp"
//! publisher = "Stadium Travel"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site name, appended to page titles and used as `og:site_name`.
    pub title: String,

    /// Absolute base URL, e.g. `https://example.com`. Canonical URLs,
    /// JSON-LD and the sitemap are built from it.
    pub url: Option<String>,

    /// Language code (e.g., "en", "es-MX").
    pub language: String,

    /// Meta description of the guide section page.
    pub description: String,

    /// Image used when a guide has none.
    pub default_image: String,

    /// Publisher name for structured data.
    pub publisher: String,
}

pub struct SiteFields {
    pub url: FieldPath,
    pub language: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        url: FieldPath::new("site.url"),
        language: FieldPath::new("site.language"),
    };

    /// Base URL without trailing slash (empty when unset).
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Absolute URL for a site path. Already-absolute inputs are returned as-is.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url(), path)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `language` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if self.language.trim().is_empty() {
            diag.error(Self::FIELDS.language, "language must not be empty");
        }
    }
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "World Cup 2026 Travel".into(),
            url: None,
            language: "en".into(),
            description: "Getting to every World Cup 2026 stadium: trains, transit, flights and parking.".into(),
            default_image: "/images/transportation/og-default.webp".into(),
            publisher: "World Cup 2026 Travel".into(),
        }
    }
}
