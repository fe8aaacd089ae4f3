//! `catalog` command: list guides with their derived slugs.

use anyhow::Result;
use serde::Serialize;

use crate::guide::{AliasTarget, CATALOG, GuideRecord, resolve_alias};

/// Whether a catalog slug is still served at its own address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "target", rename_all = "lowercase")]
enum SlugStatus {
    Canonical,
    Renamed(&'static str),
    Retired,
}

#[derive(Debug, Serialize)]
struct CatalogRow {
    index: usize,
    slug: String,
    #[serde(flatten)]
    status: SlugStatus,
    #[serde(flatten)]
    record: GuideRecord,
}

fn rows(catalog: &[GuideRecord]) -> Vec<CatalogRow> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let slug = record.slug();
            let status = match resolve_alias(&slug).map(|rule| rule.target) {
                None => SlugStatus::Canonical,
                Some(AliasTarget::Canonical(target)) => SlugStatus::Renamed(target),
                Some(AliasTarget::Retired) => SlugStatus::Retired,
            };
            CatalogRow {
                index,
                slug,
                status,
                record: *record,
            }
        })
        .collect()
}

fn to_text(rows: &[CatalogRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{:>2}  {:<12} {}\n",
            row.index,
            row.record.category.label(),
            row.slug
        ));
        match &row.status {
            SlugStatus::Canonical => {}
            SlugStatus::Renamed(target) => out.push_str(&format!("    -> {target}\n")),
            SlugStatus::Retired => out.push_str("    -> retired\n"),
        }
    }
    out
}

/// Print the catalog as text or JSON.
pub fn run_catalog(json: bool) -> Result<()> {
    let rows = rows(CATALOG);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", to_text(&rows));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_status() {
        let rows = rows(CATALOG);
        assert_eq!(rows.len(), CATALOG.len());
        assert!(matches!(rows[0].status, SlugStatus::Renamed(_)));
        assert_eq!(rows[1].status, SlugStatus::Canonical);
        assert_eq!(rows[2].status, SlugStatus::Retired);
    }

    #[test]
    fn test_text_marks_legacy_slugs() {
        let text = to_text(&rows(CATALOG));
        assert!(text.starts_with(" 0  Buses        budget-bus-travel-intercity-connections\n"));
        assert!(text.contains("    -> retired\n"));
    }

    #[test]
    fn test_json_row() {
        let value = serde_json::to_value(&rows(CATALOG)[2]).unwrap();
        assert_eq!(value["status"], "retired");
        assert_eq!(value["readTime"], "11 min read");
        assert_eq!(value["index"], 2);
    }
}
