//! Cross-faction comparison of extracted listings.

mod arbitrage;
mod bargain;

pub mod feed;

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{ArbitrageOpportunity, Bargain, Faction, Gold, Listing};

pub use arbitrage::analyze;
pub use bargain::bargains;
pub use feed::{AuxStats, PriceFeed, SeenFeed};

/// Everything known about one faction's auction house for a run.
#[derive(Debug, Clone)]
pub struct FactionMarket {
    pub faction: Faction,
    pub listings: Vec<Listing>,
    /// Sighting counts by item id from the chosen count feed.
    pub times_seen: HashMap<u32, u32>,
    /// Market prices by item id from the chosen price feed.
    pub market_prices: HashMap<u32, Gold>,
}

impl FactionMarket {
    pub fn new(faction: Faction, listings: Vec<Listing>) -> Self {
        Self {
            faction,
            listings,
            times_seen: HashMap::new(),
            market_prices: HashMap::new(),
        }
    }

    pub fn with_times_seen(mut self, times_seen: HashMap<u32, u32>) -> Self {
        self.times_seen = times_seen;
        self
    }

    pub fn with_market_prices(mut self, market_prices: HashMap<u32, Gold>) -> Self {
        self.market_prices = market_prices;
        self
    }
}

/// Final result of a run, in display order, handed to the report writers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub opportunities: Vec<ArbitrageOpportunity>,
    pub horde_bargains: Vec<Bargain>,
    pub alliance_bargains: Vec<Bargain>,
}

impl AnalysisReport {
    pub fn build(horde: &FactionMarket, alliance: &FactionMarket, bargain_limit: usize) -> Self {
        Self {
            opportunities: analyze(horde, alliance),
            horde_bargains: bargains(&horde.listings, bargain_limit),
            alliance_bargains: bargains(&alliance.listings, bargain_limit),
        }
    }
}

/// Listings grouped by item name, groups in order of first appearance.
pub(crate) fn group_by_name(listings: &[Listing]) -> Vec<(&str, Vec<&Listing>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Listing>)> = Vec::new();

    for listing in listings {
        let name = listing.item_name.as_str();
        match index.get(name) {
            Some(&i) => groups[i].1.push(listing),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![listing]));
            }
        }
    }
    groups
}
