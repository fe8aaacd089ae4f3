//! JSON-LD structured data: `Article` plus `BreadcrumbList`.

use super::PageMeta;
use crate::config::SiteConfig;
use crate::guide::{CATALOG, Resolution};
use crate::utils::html::escape_script;
use serde::Serialize;
use serde_json::{Value, json};

/// One step of the site hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

/// Home → Transportation → current guide.
///
/// The last crumb is named by the display-string resolver and linked to the
/// canonical URL. The section page itself (empty slug) ends at the section.
pub fn breadcrumbs(resolution: &Resolution, meta: &PageMeta, config: &SiteConfig) -> Vec<Breadcrumb> {
    let guides = &config.guides;
    let mut crumbs = vec![
        Breadcrumb {
            name: "Home".into(),
            url: config.site.absolute("/"),
        },
        Breadcrumb {
            name: guides.section_label.clone(),
            url: config.site.absolute(&guides.section),
        },
    ];

    if !resolution.slug.is_empty() {
        crumbs.push(Breadcrumb {
            name: resolution.display_title.clone(),
            url: meta.canonical_url.clone(),
        });
    }
    crumbs
}

/// Build the JSON-LD graph for a page.
pub fn structured_data(
    resolution: &Resolution,
    meta: &PageMeta,
    crumbs: &[Breadcrumb],
    config: &SiteConfig,
) -> Value {
    let publisher = json!({
        "@type": "Organization",
        "name": config.site.publisher,
        "url": config.site.absolute("/"),
    });

    let mut article = json!({
        "@type": "Article",
        "headline": meta.title,
        "description": meta.description,
        "image": meta.image,
        "url": meta.canonical_url,
        "mainEntityOfPage": meta.canonical_url,
        "inLanguage": config.site.language,
        "publisher": publisher,
    });

    if let Some(record) = resolution.content_record(CATALOG) {
        article["author"] = json!({ "@type": "Organization", "name": record.author });
        article["articleSection"] = json!(record.category.label());
    }
    if let Some(published) = &meta.published {
        article["datePublished"] = json!(published);
    }
    if let Some(modified) = meta.modified.as_ref().or(meta.published.as_ref()) {
        article["dateModified"] = json!(modified);
    }

    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": crumb.url,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            article,
            { "@type": "BreadcrumbList", "itemListElement": items },
        ],
    })
}

/// `<script type="application/ld+json">` element for the graph.
pub fn script_tag(data: &Value) -> String {
    format!(
        "<script type=\"application/ld+json\">{}</script>",
        escape_script(&data.to_string())
    )
}
