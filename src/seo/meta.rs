//! Page metadata handed to the SEO emitters.

use crate::config::SiteConfig;
use crate::guide::{CATALOG, Resolution, editorial_entry};
use serde::Serialize;

/// Everything the `<head>` needs to describe a guide page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub image: String,
    pub published: Option<String>,
    pub modified: Option<String>,
    /// Keep the page out of search indexes.
    pub noindex: bool,
}

impl PageMeta {
    /// Build metadata for a resolved slug.
    ///
    /// The canonical URL always points at the canonical slug, so a legacy
    /// slug is never indexed under its old address. Retired slugs have no
    /// canonical guide: they point at the section and are marked `noindex`.
    pub fn from_resolution(resolution: &Resolution, config: &SiteConfig) -> Self {
        let guides = &config.guides;
        let routes = guides.routes();
        let retired = resolution.is_retired();

        let title = if resolution.display_title.is_empty() {
            guides.section_label.clone()
        } else {
            resolution.display_title.clone()
        };

        let canonical_slug = if retired { "" } else { resolution.canonical_slug() };
        let canonical_path = if canonical_slug.is_empty() {
            routes.section.clone()
        } else {
            routes.guide_path(canonical_slug)
        };

        let description = if resolution.slug.is_empty() {
            config.site.description.clone()
        } else {
            resolution.description(&guides.generic_description)
        };

        let image = match resolution.content_record(CATALOG) {
            Some(record) if !record.image.is_empty() => record.image,
            _ => config.site.default_image.as_str(),
        };

        let editorial = editorial_entry(canonical_slug);

        Self {
            title,
            description,
            canonical_url: config.site.absolute(&canonical_path),
            image: config.site.absolute(image),
            published: editorial.map(|entry| entry.published.to_string()),
            modified: editorial.and_then(|entry| entry.modified.map(str::to_string)),
            noindex: retired,
        }
    }

    /// `<title>` text: page title plus site name.
    pub fn document_title(&self, site_title: &str) -> String {
        if site_title.is_empty() || self.title == site_title {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, site_title)
        }
    }
}
