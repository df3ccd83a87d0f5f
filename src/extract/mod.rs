//! Record extraction from Auctioneer SavedVariables text.
//!
//! The files are Lua tables written by the addon, but nothing here parses
//! Lua. Each extractor recognises the handful of record shapes it needs and
//! ignores everything else, so a file from a slightly different addon
//! version degrades to fewer records rather than an error.

mod block;
mod item_link;
mod layout;
mod source;

pub mod scan;
pub mod stats;

pub use item_link::{find_item_link, item_links, ItemLink};
pub use layout::{FieldLayout, FALLBACK_LAYOUT, STRUCTURAL_LAYOUT};
pub use scan::{extract_listings, load_scan, ExtractionPhase, ScanExtraction, ScanOptions};
pub use source::read_source;
pub use stats::{load_stats, StatSource};
