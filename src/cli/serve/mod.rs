//! Preview server for guide pages.
//!
//! Every request under the guide section is rendered on the fly; legacy
//! slugs get their correction as an inline script, exactly as a browser
//! would see it in production.

mod lifecycle;
mod path;
mod response;

use crate::{
    config::{SiteConfig, cfg},
    core::{is_shutdown, register_server},
    debug, log,
    page::render_page,
};
use anyhow::{Context, Result};
use path::Route;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bind the server and run the request loop until Ctrl+C.
pub fn serve_guides(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    log!("serve"; "http://{}{}", addr, config.guides.section);
    run_request_loop(&server, config.serve.workers)
}

fn run_request_loop(server: &Server, workers: usize) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()
        .context("failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let config = cfg();
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    let routes = config.guides.routes();
    match path::route_for(request.url(), &routes) {
        Route::Index => response::respond_redirect(request, &routes.section),
        Route::Guide(slug) => {
            let page = render_page(Some(&slug), config);
            if let Some(action) = &page.redirect {
                debug!("serve"; "{} corrects to {}", request.url(), action.path());
            }
            response::respond_page(request, page)
        }
        Route::NotFound => response::respond_not_found(request, config),
    }
}
