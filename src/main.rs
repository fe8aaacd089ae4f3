//! Guidepost - slug resolution, legacy redirects and page shells for the
//! World Cup 2026 transportation guides.

mod cli;
mod config;
mod core;
mod generator;
mod guide;
mod logger;
mod page;
mod redirect;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Resolve { slug, json } => {
            cli::resolve::run_resolve(slug.as_deref(), *json, &config)
        }
        Commands::Catalog { json } => cli::catalog::run_catalog(*json),
        Commands::Sitemap { output, minify } => generator::sitemap::build_sitemap(
            guide::CATALOG,
            &config,
            output.as_deref(),
            *minify,
        ),
        Commands::Render { slug, output } => {
            cli::render::run_render(slug.as_deref(), output.as_deref(), &config)
        }
        Commands::Serve { .. } => cli::serve::serve_guides(&config),
    }
}
