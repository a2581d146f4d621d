//! Two-line element assembly from the flat `format/tle` response.
//!
//! Space-Track returns the two element lines as one whitespace separated blob.
//! The lines are rebuilt by splitting the token list at `n / 2 + 1`, which gives
//! line one the extra token when the count is odd. Token contents, field counts
//! and checksums are not validated.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// A named element set ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TleRecord {
    pub name: String,
    pub line_one: String,
    pub line_two: String,
}

impl TleRecord {
    pub fn new(
        name: impl Into<String>,
        line_one: impl Into<String>,
        line_two: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            line_one: line_one.into(),
            line_two: line_two.into(),
        }
    }

    /// Split a raw response blob into tokens and assemble a record.
    pub fn from_raw(name: impl Into<String>, raw: &str) -> Self {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let (line_one, line_two) = assemble(&tokens);
        Self::new(name, line_one, line_two)
    }
}

impl fmt::Display for TleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.line_one)?;
        write!(f, "{}", self.line_two)
    }
}

/// Index at which the token list is split into line one and line two.
pub fn split_point(token_count: usize) -> usize {
    (token_count / 2 + 1).min(token_count)
}

/// Rebuild the two element lines from an ordered token list.
pub fn assemble<S: AsRef<str>>(tokens: &[S]) -> (String, String) {
    let mid = split_point(tokens.len());
    (join(&tokens[..mid]), join(&tokens[mid..]))
}

fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Source of raw element blobs for a single catalog object.
pub trait ElementSource {
    /// Fetch the most recent element set for `catalog_id` as returned on the wire.
    fn fetch_latest_elements(&self, catalog_id: &str) -> Result<String>;
}

/// Single-shot detail lookup: one query, then assembly. No retry.
pub fn lookup_tle<S: ElementSource + ?Sized>(
    source: &S,
    name: &str,
    catalog_id: &str,
) -> Result<TleRecord> {
    let catalog_id = catalog_id.trim();
    if catalog_id.is_empty() || catalog_id.contains('/') {
        return Err(Error::InvalidCatalogId {
            value: catalog_id.to_string(),
        });
    }

    let raw = source.fetch_latest_elements(catalog_id)?;
    debug!(catalog_id, bytes = raw.len(), "assembling element set");
    Ok(TleRecord::from_raw(name, &raw))
}
