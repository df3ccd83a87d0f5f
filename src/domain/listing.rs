//! A single auction captured in a scan snapshot.

use serde::Serialize;

use super::money::{copper_to_gold, Copper, Gold};

/// Seller placeholder used when the record does not carry a name.
pub const UNKNOWN_SELLER: &str = "Unknown";

/// One active sell order. Built once during extraction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub item_id: u32,
    pub item_name: String,
    pub level: u32,
    pub quality: u32,
    pub count: u32,
    /// Zero for bid-only auctions.
    pub buyout_price: Copper,
    pub bid_price: Copper,
    /// Auction duration bucket as reported by the client, not seconds.
    pub time_left: u32,
    pub seller_name: String,
    pub scan_frequency: u32,
}

impl Listing {
    pub fn has_buyout(&self) -> bool {
        self.buyout_price > 0
    }

    pub fn buyout_gold(&self) -> Gold {
        copper_to_gold(self.buyout_price)
    }
}
