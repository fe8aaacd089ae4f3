//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::log;
use crate::redirect::RoutePaths;

/// Turn a slug argument into the route slug.
///
/// Accepts a bare slug, a site path (`/transportation/<slug>`) or a full
/// URL. Paths and URLs are percent-decoded; bare slugs are taken verbatim.
pub fn slug_argument(input: Option<&str>, routes: &RoutePaths) -> Result<String> {
    let Some(input) = input else {
        return Ok(String::new());
    };

    let path = if input.starts_with("http://") || input.starts_with("https://") {
        let url = url::Url::parse(input).with_context(|| format!("invalid URL `{input}`"))?;
        url.path().to_string()
    } else if input.starts_with('/') {
        input.to_string()
    } else {
        return Ok(input.to_string());
    };

    let decoded = percent_encoding::percent_decode_str(&path)
        .decode_utf8()
        .with_context(|| format!("`{path}` is not valid UTF-8"))?;

    match routes.slug_from_path(&decoded) {
        Some(slug) => Ok(slug.to_string()),
        None => bail!("`{}` is not a guide route under `{}`", path, routes.section),
    }
}

/// Write command output to a file, or stdout when `output` is `None`.
pub fn write_output(output: Option<&Path>, content: &[u8], what: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {} to {}", what, path.display()))?;
            log!(what; "{}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_argument_forms() {
        let routes = RoutePaths::default();
        assert_eq!(slug_argument(None, &routes).unwrap(), "");
        assert_eq!(slug_argument(Some("abc"), &routes).unwrap(), "abc");
        assert_eq!(slug_argument(Some("/transportation/abc/"), &routes).unwrap(), "abc");
        assert_eq!(
            slug_argument(Some("https://example.com/transportation/caf%C3%A9?x=1"), &routes).unwrap(),
            "café"
        );
    }

    #[test]
    fn test_slug_argument_rejects_other_routes() {
        let routes = RoutePaths::default();
        assert!(slug_argument(Some("/blog/abc"), &routes).is_err());
        assert!(slug_argument(Some("/transportation/a/b"), &routes).is_err());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        write_output(Some(&path), b"<p>hi</p>", "render").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }
}
