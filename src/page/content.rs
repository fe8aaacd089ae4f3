//! Guide body renderer.
//!
//! Editorial prose lives outside this crate; the body shown here is the
//! record's card data. Callers only choose the variant.

use crate::guide::{CATALOG, ContentVariant, normalize};
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

const GENERIC_BODY: &str = "<article class=\"guide guide-generic\">\n\
<p class=\"lead\">Transit lines, park-and-ride lots and rideshare zones for this host city are still being mapped. Check back closer to kickoff.</p>\n\
</article>\n";

/// Render the `<article>` for a content variant.
pub fn render_content(variant: ContentVariant) -> String {
    let record = match variant {
        ContentVariant::Guide(index) => CATALOG.get(index),
        ContentVariant::Generic => None,
    };
    let Some(record) = record else {
        return GENERIC_BODY.to_string();
    };

    let mut out = String::with_capacity(512);
    let _ = writeln!(
        out,
        "<article class=\"guide guide-{}\">",
        normalize(record.category.label())
    );
    let _ = writeln!(
        out,
        "<p class=\"guide-meta\"><span class=\"category\">{}</span> <span class=\"author\">By {}</span> <span class=\"read-time\">{}</span></p>",
        record.category,
        escape(record.author),
        escape(record.read_time)
    );
    if !record.image.is_empty() {
        let _ = writeln!(
            out,
            "<img class=\"hero-image\" src=\"{}\" alt=\"{}\">",
            escape_attr(record.image),
            escape_attr(record.title)
        );
    }
    let _ = writeln!(out, "<p class=\"lead\">{}</p>", escape(record.intro));
    out.push_str("</article>\n");
    out
}
