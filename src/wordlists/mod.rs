//! Word catalog for puzzle generation and guess checking
//!
//! Provides the embedded lists compiled into the binary plus the [`Catalog`]
//! built from them at startup.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{Catalog, CatalogError, DEFAULT_CUTOFF};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};
