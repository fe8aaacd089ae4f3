//! Sitemap generation.
//!
//! Lists the section page and every canonical guide URL. Legacy slugs are
//! never listed; search engines only see the address a guide lives at now.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/transportation/some-guide</loc>
//!     <lastmod>2026-04-18</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    cli::common::write_output,
    config::SiteConfig,
    debug,
    generator::minify_xml,
    guide::{GuideRecord, editorial_entry, is_legacy},
};
use anyhow::Result;
use std::borrow::Cow;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build the sitemap and write it to `output`, or stdout when `None`.
pub fn build_sitemap(
    catalog: &[GuideRecord],
    config: &SiteConfig,
    output: Option<&Path>,
    minify: bool,
) -> Result<()> {
    let sitemap = Sitemap::build(catalog, config);
    let count = sitemap.urls.len();
    let xml = sitemap.into_xml();
    let xml = minify_xml(xml.as_bytes(), minify);

    debug!("sitemap"; "{} urls", count);
    write_output(output, &xml, "sitemap")
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(catalog: &[GuideRecord], config: &SiteConfig) -> Self {
        let routes = config.guides.routes();
        let mut urls = vec![UrlEntry {
            loc: config.site.absolute(&routes.section),
            lastmod: None,
        }];

        let mut seen = rustc_hash::FxHashSet::default();
        for record in catalog {
            let slug = record.slug();
            if is_legacy(&slug) || !seen.insert(slug.clone()) {
                continue;
            }
            let lastmod = editorial_entry(&slug)
                .map(|entry| entry.modified.unwrap_or(entry.published))
                .map(date_only);
            urls.push(UrlEntry {
                loc: config.site.absolute(&routes.guide_path(&slug)),
                lastmod,
            });
        }

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// `2026-04-18T14:30:00Z` -> `2026-04-18`
fn date_only(timestamp: &str) -> String {
    timestamp.split('T').next().unwrap_or(timestamp).to_string()
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::guide::CATALOG;

    fn config() -> SiteConfig {
        test_parse_config("[site]\nurl = \"https://example.com/\"")
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's <x>"), "it&apos;s &lt;x&gt;");
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2026-04-18T14:30:00Z"), "2026-04-18");
        assert_eq!(date_only("2026-04-18"), "2026-04-18");
    }

    #[test]
    fn test_sitemap_skips_legacy_slugs() {
        let sitemap = Sitemap::build(CATALOG, &config());
        let locs: Vec<&str> = sitemap.urls.iter().map(|u| u.loc.as_str()).collect();

        assert_eq!(locs[0], "https://example.com/transportation");
        assert!(!locs.iter().any(|l| l.ends_with("/budget-bus-travel-intercity-connections")));
        assert!(!locs.iter().any(|l| l.ends_with("-your-complete-transportation-guide-to-atandt-stadium")));
        assert!(locs.iter().any(|l| l.ends_with(
            "/miami-world-cup-2026-your-complete-transportation-guide-to-hard-rock-stadium"
        )));
        assert!(locs.iter().skip(1).all(|l| l.starts_with("https://example.com/transportation/")));
    }

    #[test]
    fn test_sitemap_lastmod_prefers_modified() {
        let sitemap = Sitemap::build(CATALOG, &config());
        let lastmod = |suffix: &str| {
            sitemap
                .urls
                .iter()
                .find(|u| u.loc.ends_with(suffix))
                .and_then(|u| u.lastmod.clone())
        };
        assert_eq!(
            lastmod("hard-rock-stadium").as_deref(),
            Some("2026-04-18")
        );
        // Published only.
        assert_eq!(
            lastmod("levis-stadium").as_deref(),
            Some("2025-12-01")
        );
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/transportation/a?b=1&c=2".to_string(),
                lastmod: Some("2026-01-01".to_string()),
            }],
        };
        let xml = sitemap.into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert!(xml.contains("<loc>https://example.com/transportation/a?b=1&amp;c=2</loc>"));
        assert!(xml.contains("<lastmod>2026-01-01</lastmod>"));
        assert_eq!(lines.last().copied(), Some("</urlset>"));
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        build_sitemap(CATALOG, &config(), Some(&path), true).unwrap();

        let xml = std::fs::read_to_string(&path).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(!xml.contains('\n'));
    }
}
