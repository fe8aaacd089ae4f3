//! Slug → guide record lookup.

use super::{GuideRecord, normalize};

/// Find the guide whose title normalizes to `slug`.
///
/// First match in catalog order wins. An empty or absent slug never matches.
pub fn lookup<'a>(slug: Option<&str>, catalog: &'a [GuideRecord]) -> Option<&'a GuideRecord> {
    lookup_indexed(slug, catalog).map(|(_, record)| record)
}

/// Like [`lookup`], also returning the record's catalog position.
pub fn lookup_indexed<'a>(
    slug: Option<&str>,
    catalog: &'a [GuideRecord],
) -> Option<(usize, &'a GuideRecord)> {
    let slug = slug.filter(|s| !s.is_empty())?;
    catalog
        .iter()
        .enumerate()
        .find(|(_, record)| normalize(record.title) == slug)
}
