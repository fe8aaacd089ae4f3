//! `resolve` command: show what a slug resolves to.

use anyhow::Result;
use serde::Serialize;

use super::common::slug_argument;
use crate::config::SiteConfig;
use crate::guide::{CATALOG, ContentVariant, Resolution, resolve};
use crate::redirect::{RedirectAction, RoutePaths, redirect_for};

/// Resolution plus the route-level view of it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveReport {
    #[serde(flatten)]
    resolution: Resolution,
    description: String,
    canonical_path: String,
    action: Option<RedirectAction>,
}

impl ResolveReport {
    fn new(resolution: Resolution, config: &SiteConfig, routes: &RoutePaths) -> Self {
        let canonical_path = match resolution.canonical_slug() {
            "" => routes.section.clone(),
            slug => routes.guide_path(slug),
        };
        Self {
            description: resolution.description(&config.guides.generic_description),
            action: redirect_for(&resolution.slug, routes),
            canonical_path,
            resolution,
        }
    }

    fn to_text(&self) -> String {
        let r = &self.resolution;
        let content = match r.variant {
            ContentVariant::Guide(index) => match CATALOG.get(index) {
                Some(record) => format!("guide #{index} ({})", record.title),
                None => format!("guide #{index}"),
            },
            ContentVariant::Generic => "generic".to_string(),
        };
        let action = match &self.action {
            Some(RedirectAction::Canonicalize { path }) => format!("replace url -> {path}"),
            Some(RedirectAction::NotFound { path }) => format!("not found -> {path}"),
            None => "none".to_string(),
        };

        let rows = [
            ("slug", r.slug.as_str()),
            ("title", r.display_title.as_str()),
            ("content", content.as_str()),
            ("canonical", self.canonical_path.as_str()),
            ("redirect", action.as_str()),
        ];
        rows.iter()
            .map(|(key, value)| format!("{key:<10} {value}\n"))
            .collect()
    }
}

/// Print the resolution of `input` as text or JSON.
pub fn run_resolve(input: Option<&str>, json: bool, config: &SiteConfig) -> Result<()> {
    let routes = config.guides.routes();
    let slug = slug_argument(input, &routes)?;
    let report = ResolveReport::new(resolve(Some(&slug)), config, &routes);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(slug: &str) -> ResolveReport {
        let config = SiteConfig::default();
        let routes = config.guides.routes();
        ResolveReport::new(resolve(Some(slug)), &config, &routes)
    }

    #[test]
    fn test_report_for_legacy_slug() {
        let report = report("santa-clara-levis-stadium-transportation");
        let text = report.to_text();
        assert!(text.contains("title      San Francisco Bay Area World Cup 2026: Getting to Levi's Stadium\n"));
        assert!(text.contains(
            "redirect   replace url -> /transportation/san-francisco-bay-area-world-cup-2026-getting-to-levis-stadium\n"
        ));
        assert!(text.contains("content    guide #4"));
    }

    #[test]
    fn test_report_for_retired_slug() {
        let report = report("dallas-world-cup-2026-your-complete-transportation-guide-to-atandt-stadium");
        assert_eq!(
            report.action,
            Some(RedirectAction::NotFound { path: "/404".into() })
        );
        assert!(report.to_text().contains("redirect   not found -> /404\n"));
    }

    #[test]
    fn test_report_json_shape() {
        let value = serde_json::to_value(report("houston-metrorail")).unwrap();
        assert_eq!(value["slug"], "houston-metrorail");
        assert_eq!(value["displayTitle"], "Houston Metrorail");
        assert_eq!(value["canonicalPath"], "/transportation/houston-metrorail");
        assert!(value["action"].is_null());
        assert!(value["guide"].is_null());
    }

    #[test]
    fn test_report_for_section_page() {
        let report = report("");
        assert_eq!(report.canonical_path, "/transportation");
        assert!(report.to_text().contains("content    generic\n"));
    }
}
