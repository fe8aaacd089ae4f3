//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Guidepost: transportation guide slug resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: guidepost.toml)
    #[arg(short = 'C', long, global = true, default_value = "guidepost.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site URL (canonical links, JSON-LD, sitemap)
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a slug: guide match, display title and redirect
    #[command(visible_alias = "r")]
    Resolve {
        /// Slug or path (`/transportation/<slug>`); omit for the empty slug
        slug: Option<String>,

        /// Print JSON instead of text
        #[arg(short, long)]
        json: bool,
    },

    /// List catalog guides with their derived slugs
    #[command(visible_alias = "c")]
    Catalog {
        /// Print JSON instead of text
        #[arg(short, long)]
        json: bool,
    },

    /// Write sitemap.xml for canonical guide URLs
    Sitemap {
        /// Output file (stdout when omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Strip indentation and newlines from the XML
        #[arg(short, long)]
        minify: bool,
    },

    /// Render the HTML page shell for a slug
    Render {
        /// Slug or path (`/transportation/<slug>`)
        slug: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Serve guide pages for local preview
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}
