//! Parsers for the roster document: section blocks, then bullet entries.

pub mod entry;
pub mod section;

/// Prefix every contributor line starts with.
pub const BULLET_PREFIX: &str = "- [";
