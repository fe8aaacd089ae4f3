//! Configuration section definitions.
//!
//! Each module corresponds to a section in `guidepost.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `site`   | `[site]`     | Site identity, base URL, default image   |
//! | `guides` | `[guides]`   | Guide section route, not-found route     |
//! | `serve`  | `[serve]`    | Preview server                           |

mod guides;
mod serve;
mod site;

pub use guides::GuidesConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
