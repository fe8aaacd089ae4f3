//! Open Graph and Twitter Card meta tags.

use super::PageMeta;
use crate::config::SiteConfig;
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

/// Site-level Open Graph defaults.
pub struct OgDefaults<'a> {
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub locale: &'a str,
    pub twitter_card: &'static str,
}

impl<'a> OgDefaults<'a> {
    /// Create default OG tags from site config.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            og_type: "article",
            site_name: &config.site.title,
            locale: &config.site.language,
            twitter_card: "summary_large_image",
        }
    }
}

/// Render the SEO `<head>` tags for a page.
///
/// Covers `<title>`, description, canonical link, Open Graph, Twitter Card
/// and article timestamps. One tag per line.
pub fn head_tags(meta: &PageMeta, config: &SiteConfig) -> String {
    let og = OgDefaults::from_config(config);
    let mut out = String::with_capacity(1024);

    let _ = writeln!(
        out,
        "<title>{}</title>",
        escape(&meta.document_title(og.site_name))
    );
    push_meta(&mut out, "name", "description", &meta.description);
    if meta.noindex {
        push_meta(&mut out, "name", "robots", "noindex");
    }
    let _ = writeln!(
        out,
        "<link rel=\"canonical\" href=\"{}\">",
        escape_attr(&meta.canonical_url)
    );

    push_meta(&mut out, "property", "og:type", og.og_type);
    push_meta(&mut out, "property", "og:title", &meta.title);
    push_meta(&mut out, "property", "og:description", &meta.description);
    push_meta(&mut out, "property", "og:url", &meta.canonical_url);
    push_meta(&mut out, "property", "og:image", &meta.image);
    if !og.site_name.is_empty() {
        push_meta(&mut out, "property", "og:site_name", og.site_name);
    }
    push_meta(&mut out, "property", "og:locale", og.locale);

    push_meta(&mut out, "name", "twitter:card", og.twitter_card);
    push_meta(&mut out, "name", "twitter:title", &meta.title);
    push_meta(&mut out, "name", "twitter:description", &meta.description);
    push_meta(&mut out, "name", "twitter:image", &meta.image);

    if let Some(published) = &meta.published {
        push_meta(&mut out, "property", "article:published_time", published);
    }
    if let Some(modified) = &meta.modified {
        push_meta(&mut out, "property", "article:modified_time", modified);
    }

    out
}

fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
    let _ = writeln!(
        out,
        "<meta {attr}=\"{key}\" content=\"{}\">",
        escape_attr(content)
    );
}
