//! Guide page rendering.
//!
//! - `content`: body for a content variant
//! - `shell`: full HTML document with SEO head and redirect script

mod content;
mod shell;

pub use content::render_content;
pub use shell::{RenderedPage, render_page};
