//! Update Log
//!
//! Release history for the game: an ordered, read-only table of versions with
//! categorized change notes, plus the icon and color each category is shown
//! with. The bundled history is parsed once on first use and shared for the
//! life of the process.

pub mod audit;
pub mod catalog;
pub mod category;

// Re-export commonly used types
pub use audit::{CatalogIssue, is_valid_date};
pub use catalog::{CategoryCounts, ChangeItem, Changelog, ReleaseEntry, catalog, entries};
pub use category::{
    Category, ColorParseError, Rgb, classify_color, classify_icon, parse_hex_color,
};
