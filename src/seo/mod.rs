//! SEO metadata and structured data.
//!
//! | Module   | Output                                          |
//! |----------|-------------------------------------------------|
//! | `meta`   | `PageMeta` built from a slug resolution         |
//! | `og`     | `<title>`, description, canonical, OG, Twitter  |
//! | `schema` | JSON-LD `Article` + `BreadcrumbList`            |

mod meta;
mod og;
mod schema;

pub use meta::PageMeta;
pub use og::head_tags;
pub use schema::{Breadcrumb, breadcrumbs, script_tag, structured_data};
