//! Satlookup CLI library.
//!
//! Terminal styling, boxed output, the bounded integer prompt and the
//! scrolling select widget used by the `satlookup` binary.

pub mod output;
pub mod prompt;
pub mod select;
pub mod terminal;
