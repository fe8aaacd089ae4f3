//! Guide catalog and slug resolution.
//!
//! # Module Structure
//!
//! ```text
//! guide/
//! ├── slug       # normalize(), title_case()
//! ├── catalog    # GuideRecord, CATALOG, editorial dates
//! ├── lookup     # slug → GuideRecord (first match wins)
//! ├── alias      # ordered legacy alias rules
//! ├── display    # slug → display string
//! └── resolve    # SlugTable, Resolution
//! ```

mod alias;
mod catalog;
mod display;
mod lookup;
mod resolve;
mod slug;

pub use alias::{AliasRule, AliasTarget, is_legacy, resolve_alias};
pub use catalog::{CATALOG, GuideRecord, editorial_entry};
pub use lookup::{lookup, lookup_indexed};
pub use resolve::{ContentVariant, Resolution, SlugTable, resolve};
pub use slug::{normalize, title_case};
