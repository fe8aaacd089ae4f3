//! HTML page shell for a guide route.
//!
//! Order inside `<body>` matters: breadcrumbs, hero and content come first,
//! the redirect script last, so a correction never precedes the render.

use super::render_content;
use crate::config::SiteConfig;
use crate::guide::resolve;
use crate::redirect::{RedirectAction, Redirector, ScriptNavigator};
use crate::seo::{Breadcrumb, PageMeta, breadcrumbs, head_tags, script_tag, structured_data};
use crate::utils::html::{escape, escape_attr, escape_script};
use std::fmt::Write;

/// A rendered page and the correction it carries, if any.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub redirect: Option<RedirectAction>,
}

/// Render the full document for a guide slug.
pub fn render_page(slug: Option<&str>, config: &SiteConfig) -> RenderedPage {
    let resolution = resolve(slug);
    let meta = PageMeta::from_resolution(&resolution, config);
    let crumbs = breadcrumbs(&resolution, &meta, config);
    let data = structured_data(&resolution, &meta, &crumbs, config);

    // Each render owns its redirector; the check runs once per page view
    let mut nav = ScriptNavigator::new();
    let redirect = Redirector::new().check(slug, &config.guides.routes(), &mut nav);

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_attr(&config.site.language));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&head_tags(&meta, config));
    html.push_str(&script_tag(&data));
    html.push_str("\n</head>\n<body>\n");

    html.push_str(&breadcrumb_nav(&crumbs));
    html.push_str("<main>\n");
    let _ = writeln!(
        html,
        "<header class=\"hero\"><h1>{}</h1></header>",
        escape(&meta.title)
    );
    html.push_str(&render_content(resolution.variant));
    html.push_str("</main>\n");

    if let Some(script) = nav.script() {
        let _ = writeln!(html, "<script>{}</script>", escape_script(&script));
    }
    html.push_str("</body>\n</html>\n");

    RenderedPage { html, redirect }
}

fn breadcrumb_nav(crumbs: &[Breadcrumb]) -> String {
    let mut out = String::from("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\">\n<ol>\n");
    for (i, crumb) in crumbs.iter().enumerate() {
        if i + 1 == crumbs.len() {
            let _ = writeln!(
                out,
                "<li aria-current=\"page\">{}</li>",
                escape(&crumb.name)
            );
        } else {
            let _ = writeln!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                escape_attr(&crumb.url),
                escape(&crumb.name)
            );
        }
    }
    out.push_str("</ol>\n</nav>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const BUDGET_BUS: &str = "budget-bus-travel-intercity-connections";
    const MIAMI: &str = "miami-world-cup-2026-your-complete-transportation-guide-to-hard-rock-stadium";

    fn config() -> SiteConfig {
        test_parse_config("[site]\ntitle = \"Stadium Travel\"\nurl = \"https://example.com\"")
    }

    #[test]
    fn test_canonical_page_has_no_script() {
        let page = render_page(Some(MIAMI), &config());
        assert!(page.redirect.is_none());
        assert!(page.html.contains(
            "<h1>Miami World Cup 2026: Your Complete Transportation Guide to Hard Rock Stadium</h1>"
        ));
        assert!(!page.html.contains("history.replaceState"));
        assert!(page.html.contains("application/ld+json"));
    }

    #[test]
    fn test_legacy_page_renders_then_canonicalizes() {
        let page = render_page(Some(BUDGET_BUS), &config());
        let html = &page.html;

        assert_eq!(
            page.redirect,
            Some(RedirectAction::Canonicalize {
                path: format!("/transportation/{MIAMI}")
            })
        );
        // Miami content shows under the old address
        assert!(html.contains("<p class=\"lead\">Brightline"));
        assert!(html.contains(&format!(
            "<link rel=\"canonical\" href=\"https://example.com/transportation/{MIAMI}\">"
        )));

        let main_end = html.find("</main>").unwrap();
        let script = html.find("history.replaceState").unwrap();
        assert!(script > main_end);
    }

    #[test]
    fn test_retired_page_sends_to_not_found() {
        let page = render_page(
            Some("dallas-world-cup-2026-your-complete-transportation-guide-to-atandt-stadium"),
            &config(),
        );
        assert!(matches!(page.redirect, Some(RedirectAction::NotFound { .. })));
        assert!(page.html.contains("location.replace(\"/404\");"));
        assert!(page.html.contains("AT&amp;T Stadium"));
        assert!(page.html.contains("<meta name=\"robots\" content=\"noindex\">"));
    }

    #[test]
    fn test_unknown_slug_renders_generic_page() {
        let page = render_page(Some("houston-metrorail"), &config());
        assert!(page.redirect.is_none());
        assert!(page.html.contains("<h1>Houston Metrorail</h1>"));
        assert!(page.html.contains("guide-generic"));
        assert!(page.html.contains("<li aria-current=\"page\">Houston Metrorail</li>"));
    }

    #[test]
    fn test_breadcrumb_nav() {
        let nav = breadcrumb_nav(&[
            Breadcrumb {
                name: "Home".into(),
                url: "/".into(),
            },
            Breadcrumb {
                name: "A & B".into(),
                url: "/a".into(),
            },
        ]);
        assert!(nav.contains("<li><a href=\"/\">Home</a></li>"));
        assert!(nav.contains("<li aria-current=\"page\">A &amp; B</li>"));
    }
}
