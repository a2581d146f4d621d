//! Satlookup library entry points.
//!
//! This crate exposes the Space-Track client, the paginated catalog browser
//! and the TLE assembler. Terminal concerns (select widget, colors, integer
//! prompt) live in the CLI crate, which reaches the browser through the
//! [`ChoicePrompt`] trait.
//!

#![deny(warnings)]

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod spacetrack;
pub mod tle;

pub use browser::{
    load_more_label, BrowseOutcome, BrowseSession, CatalogBrowser, ChoicePrompt, SelectRequest,
    Selection, SELECT_LABEL,
};
pub use catalog::{
    extract_catalog_id, latest_elements_path, split_label, CatalogEntry, CatalogPage,
    CatalogSource, PageQuery, DEFAULT_PAGE_SIZE,
};
pub use config::SpaceTrackConfig;
pub use error::{Error, Result};
pub use spacetrack::SpaceTrackClient;
pub use tle::{assemble, lookup_tle, split_point, ElementSource, TleRecord};
