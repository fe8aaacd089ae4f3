//! Request URL to route resolution.

use crate::redirect::RoutePaths;
use percent_encoding::percent_decode_str;

/// What a request URL addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Site root, sent on to the guide section.
    Index,
    /// Guide page; the slug may be empty (section page).
    Guide(String),
    NotFound,
}

/// Map a raw request URL (path plus optional query) to a route.
pub fn route_for(url: &str, routes: &RoutePaths) -> Route {
    let path = strip_query(url);
    let Some(path) = decode(path) else {
        return Route::NotFound;
    };

    if path == "/" || path.is_empty() {
        return Route::Index;
    }

    match routes.slug_from_path(&path) {
        Some(slug) => Route::Guide(slug.to_string()),
        None => Route::NotFound,
    }
}

fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Percent-decode a path. Invalid UTF-8 is rejected.
fn decode(path: &str) -> Option<String> {
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}
