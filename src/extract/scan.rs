//! Listing extraction from `auc-scandata.lua`.
//!
//! Two phases. The structural phase walks the `["ropes"]` container down to
//! its `return {...}` chunk and reads each entry's comma-separated fields.
//! If that yields fewer listings than [`ScanOptions::fallback_threshold`],
//! the fallback phase scans the whole file for item links and reads the
//! digits that follow each one. Whichever phase finds more wins.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::Listing;
use crate::error::ExtractError;

use super::block::{child_blocks, keyed_block, return_block};
use super::item_link::{find_item_link, item_links};
use super::layout::{FALLBACK_LAYOUT, STRUCTURAL_LAYOUT};
use super::source::read_source;

/// Key of the listings container in the scan data.
pub const LISTINGS_KEY: &str = "ropes";

/// Tuning for listing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanOptions {
    /// Run the fallback phase when the structural phase finds fewer listings.
    #[serde(default = "default_fallback_threshold")]
    pub fallback_threshold: usize,

    /// Characters after each item link that the fallback phase reads.
    #[serde(default = "default_fallback_window")]
    pub fallback_window: usize,
}

fn default_fallback_threshold() -> usize {
    1
}

fn default_fallback_window() -> usize {
    200
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            fallback_threshold: default_fallback_threshold(),
            fallback_window: default_fallback_window(),
        }
    }
}

/// Which phase produced a [`ScanExtraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPhase {
    Structural,
    Fallback,
}

impl fmt::Display for ExtractionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionPhase::Structural => f.write_str("structural"),
            ExtractionPhase::Fallback => f.write_str("fallback"),
        }
    }
}

/// Listings recovered from one scan file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanExtraction {
    pub listings: Vec<Listing>,
    pub phase: ExtractionPhase,
    /// Records that looked like listings but could not be read.
    pub skipped: usize,
}

impl ScanExtraction {
    fn empty(phase: ExtractionPhase) -> Self {
        Self {
            listings: Vec::new(),
            phase,
            skipped: 0,
        }
    }

    fn push(&mut self, record: Result<Listing, ExtractError>) {
        match record {
            Ok(listing) => self.listings.push(listing),
            Err(e) => {
                debug!(phase = %self.phase, error = %e, "Skipping record");
                self.skipped += 1;
            }
        }
    }
}

fn seller_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?:\d+\s*,\s*){7}\\?"([^"\\]+)\\?""#).expect("seller pattern")
    })
}

fn digits_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("digits pattern"))
}

fn parse_number(token: &str) -> Result<u64, ExtractError> {
    token
        .parse()
        .map_err(|_| ExtractError::malformed(format!("number {token} out of range")))
}

/// Numeric fields of a structural entry, in order. Fields that are not
/// entirely digits (`nil`, quoted strings, the item link) are dropped.
fn numeric_fields(entry: &str) -> Result<Vec<u64>, ExtractError> {
    entry
        .split(',')
        .map(|field| field.trim().trim_matches(|c| c == '"' || c == '\\'))
        .filter(|field| !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()))
        .map(parse_number)
        .collect()
}

/// Seller name: the quoted string after a run of seven integers.
fn seller_name(entry: &str) -> Option<String> {
    seller_regex()
        .captures(entry)
        .map(|caps| caps[1].to_string())
}

/// Read one entry of the listings container.
///
/// `Ok(None)` for entries without an item link, which are not listings.
pub fn parse_structural_entry(entry: &str) -> Result<Option<Listing>, ExtractError> {
    let Some(link) = find_item_link(entry)? else {
        return Ok(None);
    };
    let numbers = numeric_fields(entry)?;
    STRUCTURAL_LAYOUT
        .listing(&link, &numbers, seller_name(entry))
        .map(Some)
}

/// Structural phase: entries of the `return {...}` chunk in the listings container.
pub fn structural_phase(text: &str) -> ScanExtraction {
    let mut extraction = ScanExtraction::empty(ExtractionPhase::Structural);

    let Some(container) = keyed_block(text, LISTINGS_KEY) else {
        debug!("No listings container found");
        return extraction;
    };
    let Some(payload) = return_block(container) else {
        debug!(container_len = container.len(), "No return chunk in listings container");
        return extraction;
    };

    for entry in child_blocks(payload) {
        if let Some(record) = parse_structural_entry(entry).transpose() {
            extraction.push(record);
        }
    }
    extraction
}

/// The `window` characters following byte offset `from`.
fn window_after(text: &str, from: usize, window: usize) -> &str {
    let rest = &text[from..];
    let end = rest
        .char_indices()
        .nth(window)
        .map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

/// Fallback phase: digits following every item link anywhere in `text`.
pub fn fallback_phase(text: &str, window: usize) -> ScanExtraction {
    let mut extraction = ScanExtraction::empty(ExtractionPhase::Fallback);

    for link in item_links(text) {
        let record = link.and_then(|link| {
            let numbers = digits_regex()
                .find_iter(window_after(text, link.span.end, window))
                .map(|m| parse_number(m.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            FALLBACK_LAYOUT.listing(&link, &numbers, None)
        });
        extraction.push(record);
    }
    extraction
}

/// Extract listings from scan data text, falling back when the structural
/// phase comes up short.
pub fn extract_listings(text: &str, options: &ScanOptions) -> ScanExtraction {
    let structural = structural_phase(text);
    if structural.listings.len() >= options.fallback_threshold {
        return structural;
    }

    info!(
        found = structural.listings.len(),
        threshold = options.fallback_threshold,
        "Structural phase came up short, trying fallback"
    );
    let fallback = fallback_phase(text, options.fallback_window);
    if fallback.listings.len() > structural.listings.len() {
        fallback
    } else {
        structural
    }
}

/// Read and extract one scan file. `None` when the file cannot be read.
pub fn load_scan(path: &Path, options: &ScanOptions) -> Option<ScanExtraction> {
    let text = match read_source(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Scan data unavailable");
            return None;
        }
    };
    info!(path = %path.display(), chars = text.len(), "Processing scan data");

    let extraction = extract_listings(&text, options);
    info!(
        path = %path.display(),
        listings = extraction.listings.len(),
        skipped = extraction.skipped,
        phase = %extraction.phase,
        "Extracted listings"
    );
    Some(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNKNOWN_SELLER;

    const ENTRY: &str = r#""|cffffffff|Hitem:12345:0:0:0|h[Widget]|h|r",10,1,2,0,500,400,300,0,0,7"#;

    #[test]
    fn numeric_fields_drop_non_numeric_filler() {
        let numbers = numeric_fields(r#" "x", 10 ,nil,"20",-3,4.5,7"#).unwrap();
        assert_eq!(numbers, vec![10, 20, 7]);
    }

    #[test]
    fn numeric_field_overflow_is_malformed() {
        assert!(numeric_fields("1,99999999999999999999999").is_err());
    }

    #[test]
    fn structural_entry_maps_positions() {
        let listing = parse_structural_entry(ENTRY).unwrap().unwrap();
        assert_eq!(listing.item_id, 12345);
        assert_eq!(listing.item_name, "Widget");
        assert_eq!(listing.level, 10);
        assert_eq!(listing.quality, 1);
        assert_eq!(listing.count, 2);
        assert_eq!(listing.buyout_price, 500);
        assert_eq!(listing.bid_price, 400);
        assert_eq!(listing.time_left, 300);
        assert_eq!(listing.scan_frequency, 7);
        assert_eq!(listing.seller_name, UNKNOWN_SELLER);
    }

    #[test]
    fn structural_entry_without_link_is_ignored() {
        assert_eq!(parse_structural_entry("1,2,3,4,5,6,7,8,9,10").unwrap(), None);
    }

    #[test]
    fn seller_follows_seven_integers() {
        let entry = r#""|Hitem:1:0|h[A]|h|r",1,2,3,4,5,6,7,"Thrall",8"#;
        assert_eq!(seller_name(entry).as_deref(), Some("Thrall"));
        let escaped = r#"\"|Hitem:1:0|h[A]|h|r\",1,2,3,4,5,6,7,\"Jaina\",8"#;
        assert_eq!(seller_name(escaped).as_deref(), Some("Jaina"));
        assert_eq!(seller_name(r#"1,2,3,4,5,6,"Short""#), None);
    }

    #[test]
    fn window_respects_char_boundaries() {
        let text = "ab€cd";
        assert_eq!(window_after(text, 0, 3), "ab€");
        assert_eq!(window_after(text, 2, 10), "€cd");
    }

    #[test]
    fn fallback_only_when_structural_short() {
        let text = format!(r#"["ropes"] = {{ "return {{{{{ENTRY}}}}}" }}"#);
        let extraction = extract_listings(&text, &ScanOptions::default());
        assert_eq!(extraction.phase, ExtractionPhase::Structural);
        assert_eq!(extraction.listings.len(), 1);
    }
}
