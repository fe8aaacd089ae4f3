//! HTTP response handlers.

use crate::config::SiteConfig;
use crate::page::RenderedPage;
use crate::utils::html::escape;
use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

const HTML: &str = "text/html; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";

/// Respond with a rendered guide page.
pub fn respond_page(request: Request, page: RenderedPage) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, HTML);
    }
    send_body(request, 200, HTML, page.html.into_bytes())
}

/// Respond with the not-found page.
pub fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, HTML);
    }
    send_body(request, 404, HTML, not_found_body(config).into_bytes())
}

/// Temporary redirect to `location`.
pub fn respond_redirect(request: Request, location: &str) -> Result<()> {
    let location = Header::from_bytes("Location", location.as_bytes())
        .map_err(|_| anyhow!("invalid redirect location: {location}"))?;
    let response = Response::empty(StatusCode(302)).with_header(location);
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn not_found_body(config: &SiteConfig) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>Page not found | {title}</title>\n<meta name=\"robots\" content=\"noindex\">\n</head>\n\
<body>\n<main>\n<h1>Page not found</h1>\n<p><a href=\"{section}\">Browse all {label} guides</a></p>\n\
</main>\n</body>\n</html>\n",
        lang = escape(&config.site.language),
        title = escape(&config.site.title),
        section = escape(&config.guides.section),
        label = escape(&config.guides.section_label),
    )
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
