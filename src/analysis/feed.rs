//! Choice of auxiliary feed for market prices and sighting counts.
//!
//! Each faction may have several stat files. The configured order decides
//! which one supplies the canonical map: the first feed in the list that
//! produced any records wins, and the rest are ignored for that faction.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use crate::domain::stat::{market_prices, times_seen};
use crate::domain::{Faction, Gold, StatMap};
use crate::extract::StatSource;

/// Provider of per-item market prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceFeed {
    Simple,
    StdDev,
    Histogram,
}

impl PriceFeed {
    pub fn source(&self) -> StatSource {
        match self {
            PriceFeed::Simple => StatSource::SimplePrice,
            PriceFeed::StdDev => StatSource::StdDev,
            PriceFeed::Histogram => StatSource::Histogram,
        }
    }
}

/// Provider of per-item sighting counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeenFeed {
    Histogram,
    Simple,
}

impl SeenFeed {
    pub fn source(&self) -> StatSource {
        match self {
            SeenFeed::Histogram => StatSource::Histogram,
            SeenFeed::Simple => StatSource::SimpleSeen,
        }
    }
}

pub fn default_price_feeds() -> Vec<PriceFeed> {
    vec![PriceFeed::Simple, PriceFeed::StdDev, PriceFeed::Histogram]
}

pub fn default_seen_feeds() -> Vec<SeenFeed> {
    vec![SeenFeed::Histogram, SeenFeed::Simple]
}

/// Extracted auxiliary statistics for one faction, keyed by extractor.
#[derive(Debug, Clone, Default)]
pub struct AuxStats {
    maps: HashMap<StatSource, StatMap>,
}

impl AuxStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: StatSource, stats: StatMap) {
        self.maps.insert(source, stats);
    }

    pub fn get(&self, source: StatSource) -> Option<&StatMap> {
        self.maps.get(&source)
    }

    fn first_present<F: Copy>(
        &self,
        order: &[F],
        source: impl Fn(F) -> StatSource,
    ) -> Option<(F, &StatMap)> {
        order.iter().find_map(|&feed| {
            self.get(source(feed))
                .filter(|stats| !stats.is_empty())
                .map(|stats| (feed, stats))
        })
    }

    /// Market prices from the first non-empty feed in `order`.
    pub fn market_prices(&self, faction: Faction, order: &[PriceFeed]) -> HashMap<u32, Gold> {
        match self.first_present(order, |feed| feed.source()) {
            Some((feed, stats)) => {
                info!(%faction, feed = ?feed, items = stats.len(), "Selected market price feed");
                market_prices(stats)
            }
            None => {
                info!(%faction, "No market price feed, falling back to listing averages");
                HashMap::new()
            }
        }
    }

    /// Sighting counts from the first non-empty feed in `order`.
    pub fn times_seen(&self, faction: Faction, order: &[SeenFeed]) -> HashMap<u32, u32> {
        match self.first_present(order, |feed| feed.source()) {
            Some((feed, stats)) => {
                info!(%faction, feed = ?feed, items = stats.len(), "Selected times seen feed");
                times_seen(stats)
            }
            None => {
                info!(%faction, "No times seen feed");
                HashMap::new()
            }
        }
    }
}
