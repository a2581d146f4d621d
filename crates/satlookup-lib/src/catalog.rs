//! Catalog data model and Space-Track query paths.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Number of catalog entries requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One tracked object as listed by the `satcat` class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "SATNAME")]
    pub name: String,
    /// NORAD catalog number, kept as the string the service returned.
    #[serde(rename = "NORAD_CAT_ID", deserialize_with = "string_or_number")]
    pub catalog_id: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog_id: catalog_id.into(),
        }
    }

    /// Display label used as select choice text, e.g. `ISS (ZARYA) (25544)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.catalog_id)
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.catalog_id)
    }
}

/// One batch of entries fetched at a given page index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogPage {
    pub index: usize,
    pub entries: Vec<CatalogEntry>,
}

impl CatalogPage {
    pub fn new(index: usize, entries: Vec<CatalogEntry>) -> Self {
        Self { index, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Offset/limit window for one catalog page.
///
/// Pages are ordered by `SATNAME` so that consecutive offsets neither overlap
/// nor skip entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub index: usize,
    pub size: usize,
}

impl PageQuery {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    pub fn offset(&self) -> usize {
        self.index * self.size
    }

    pub fn query_path(&self) -> String {
        format!(
            "/basicspacedata/query/class/satcat/orderby/SATNAME asc/limit/{},{}/emptyresult/show",
            self.size,
            self.offset()
        )
    }
}

/// Query path for the most recent element set of one catalog object.
pub fn latest_elements_path(catalog_id: &str) -> String {
    format!(
        "/basicspacedata/query/class/gp_history/format/tle/NORAD_CAT_ID/{}/orderby/EPOCH%20desc/limit/1",
        catalog_id
    )
}

/// Split a `NAME (ID)` label into its name and catalog identifier.
///
/// The identifier is the content of the last parenthesized group, so names
/// that carry their own parentheses still resolve. The name is everything
/// before that group's `(`, trimmed.
pub fn split_label(label: &str) -> Option<(&str, &str)> {
    let end = label.rfind(')')?;
    let start = label[..end].rfind('(')?;
    let id = label[start + 1..end].trim();
    if id.is_empty() {
        None
    } else {
        Some((label[..start].trim(), id))
    }
}

/// Recover the catalog identifier from a `NAME (ID)` label.
pub fn extract_catalog_id(label: &str) -> Option<&str> {
    split_label(label).map(|(_, id)| id)
}

/// Source of catalog pages; implemented by the Space-Track client and by
/// test doubles.
pub trait CatalogSource {
    /// Fetch `page_size` entries starting at `page_index * page_size`.
    fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<CatalogPage>;
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_uses_limit_then_offset() {
        let query = PageQuery::new(3, 10);
        assert_eq!(query.offset(), 30);
        assert_eq!(
            query.query_path(),
            "/basicspacedata/query/class/satcat/orderby/SATNAME asc/limit/10,30/emptyresult/show"
        );
    }

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(PageQuery::new(0, 10).offset(), 0);
    }

    #[test]
    fn latest_elements_path_orders_by_epoch() {
        assert_eq!(
            latest_elements_path("25544"),
            "/basicspacedata/query/class/gp_history/format/tle/NORAD_CAT_ID/25544/orderby/EPOCH%20desc/limit/1"
        );
    }

    #[test]
    fn label_round_trips_through_extract() {
        let entry = CatalogEntry::new("ISS (ZARYA)", "25544");
        assert_eq!(entry.label(), "ISS (ZARYA) (25544)");
        assert_eq!(extract_catalog_id(&entry.label()), Some("25544"));
    }

    #[test]
    fn split_label_uses_one_group_for_name_and_id() {
        assert_eq!(split_label("ISS (ZARYA) (25544)"), Some(("ISS (ZARYA)", "25544")));
        assert_eq!(split_label("FOO (5) ("), Some(("FOO", "5")));
        assert_eq!(split_label("(7)"), Some(("", "7")));
    }

    #[test]
    fn extract_rejects_malformed_labels() {
        assert_eq!(extract_catalog_id(""), None);
        assert_eq!(extract_catalog_id("VANGUARD 1"), None);
        assert_eq!(extract_catalog_id("BROKEN )("), None);
        assert_eq!(extract_catalog_id("EMPTY ()"), None);
    }

    #[test]
    fn entries_decode_string_and_numeric_ids() {
        let body = r#"[
            {"SATNAME": "VANGUARD 1", "NORAD_CAT_ID": "5", "OBJECT_TYPE": "PAYLOAD"},
            {"SATNAME": "VANGUARD 2", "NORAD_CAT_ID": 11}
        ]"#;
        let entries: Vec<CatalogEntry> = serde_json::from_str(body).expect("decodes");
        assert_eq!(entries[0], CatalogEntry::new("VANGUARD 1", "5"));
        assert_eq!(entries[1], CatalogEntry::new("VANGUARD 2", "11"));
    }
}
