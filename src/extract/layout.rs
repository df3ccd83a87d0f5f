//! Position tables that give meaning to a record's numeric fields.
//!
//! Both extraction phases reduce a listing to a list of integers and read
//! fields by position. The two lists differ in what gets filtered out, so
//! each phase has its own table.

use crate::domain::{Listing, UNKNOWN_SELLER};
use crate::error::ExtractError;

use super::ItemLink;

/// Where each listing field sits in a record's numeric token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub level: usize,
    pub quality: usize,
    pub count: usize,
    pub buyout: usize,
    pub bid: usize,
    pub time_left: usize,
    /// Read when present, otherwise the listing is counted as seen once.
    pub scan_frequency: usize,
    /// Records with fewer numeric tokens are rejected.
    pub min_fields: usize,
}

/// Layout for comma-separated entries inside the listings container, after
/// non-numeric fields are dropped. Position 3 is a placeholder and unused.
pub const STRUCTURAL_LAYOUT: FieldLayout = FieldLayout {
    level: 0,
    quality: 1,
    count: 2,
    buyout: 4,
    bid: 5,
    time_left: 6,
    scan_frequency: 9,
    min_fields: 10,
};

/// Layout for the digit runs found in the text window after an item link.
/// The buyout usually lands late in that run, after the bid.
pub const FALLBACK_LAYOUT: FieldLayout = FieldLayout {
    level: 0,
    quality: 1,
    count: 2,
    bid: 3,
    time_left: 6,
    scan_frequency: 9,
    buyout: 11,
    min_fields: 12,
};

impl FieldLayout {
    /// Build a listing from an item link and its numeric tokens.
    pub fn listing(
        &self,
        link: &ItemLink,
        numbers: &[u64],
        seller: Option<String>,
    ) -> Result<Listing, ExtractError> {
        if numbers.len() < self.min_fields {
            return Err(ExtractError::malformed(format!(
                "{} numeric fields for {}, need {}",
                numbers.len(),
                link.name,
                self.min_fields
            )));
        }

        let small = |field: &'static str, index: usize| -> Result<u32, ExtractError> {
            u32::try_from(numbers[index]).map_err(|_| {
                ExtractError::malformed(format!("{field} {} out of range", numbers[index]))
            })
        };

        let scan_frequency = match numbers.get(self.scan_frequency) {
            Some(_) => small("scan_frequency", self.scan_frequency)?,
            None => 1,
        };

        Ok(Listing {
            item_id: link.item_id,
            item_name: link.name.clone(),
            level: small("level", self.level)?,
            quality: small("quality", self.quality)?,
            count: small("count", self.count)?,
            buyout_price: numbers[self.buyout],
            bid_price: numbers[self.bid],
            time_left: small("time_left", self.time_left)?,
            seller_name: seller.unwrap_or_else(|| UNKNOWN_SELLER.to_string()),
            scan_frequency,
        })
    }
}
