//! `render` command: write the HTML document for a slug.

use std::path::Path;

use anyhow::Result;

use super::common::{slug_argument, write_output};
use crate::config::SiteConfig;
use crate::debug;
use crate::page::render_page;

pub fn run_render(input: Option<&str>, output: Option<&Path>, config: &SiteConfig) -> Result<()> {
    let slug = slug_argument(input, &config.guides.routes())?;
    let page = render_page(Some(&slug), config);

    if let Some(action) = &page.redirect {
        debug!("render"; "page carries a correction to {}", action.path());
    }
    write_output(output, page.html.as_bytes(), "render")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        let config = SiteConfig::default();

        run_render(
            Some("/transportation/budget-bus-travel-intercity-connections"),
            Some(&path),
            &config,
        )
        .unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("history.replaceState"));
    }
}
