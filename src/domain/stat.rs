//! Per-item aggregate statistics from the auxiliary stat files.

use std::collections::HashMap;

use super::money::Gold;

/// Aggregate numbers for one item id from one auxiliary source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketStat {
    pub item_id: u32,
    pub times_seen: u32,
    /// `None` for sources that only carry a sighting count.
    pub market_price: Option<Gold>,
}

pub type StatMap = HashMap<u32, MarketStat>;

/// How a later record for an already-seen item id is reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Replace only when the newcomer has a strictly higher sighting count,
    /// so ties keep the first-seen price.
    MaxCountWins,
    /// The newcomer always replaces the existing entry.
    LastWins,
}

impl MergePolicy {
    /// Choose between the current entry and a newly parsed record.
    pub fn merge(self, existing: Option<&MarketStat>, candidate: MarketStat) -> MarketStat {
        match (self, existing) {
            (MergePolicy::MaxCountWins, Some(current))
                if candidate.times_seen <= current.times_seen =>
            {
                current.clone()
            }
            _ => candidate,
        }
    }

    /// Fold a record into `map` under this policy.
    pub fn insert(self, map: &mut StatMap, candidate: MarketStat) {
        let chosen = self.merge(map.get(&candidate.item_id), candidate);
        map.insert(chosen.item_id, chosen);
    }
}

/// Project a stat map onto its sighting counts.
pub fn times_seen(map: &StatMap) -> HashMap<u32, u32> {
    map.values().map(|s| (s.item_id, s.times_seen)).collect()
}

/// Project a stat map onto its prices, dropping count-only entries.
pub fn market_prices(map: &StatMap) -> HashMap<u32, Gold> {
    map.values()
        .filter_map(|s| s.market_price.map(|p| (s.item_id, p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stat(seen: u32, price: Gold) -> MarketStat {
        MarketStat {
            item_id: 7,
            times_seen: seen,
            market_price: Some(price),
        }
    }

    #[test]
    fn max_count_keeps_higher_count_and_its_price() {
        let mut map = StatMap::new();
        MergePolicy::MaxCountWins.insert(&mut map, stat(5, dec!(1.5)));
        MergePolicy::MaxCountWins.insert(&mut map, stat(3, dec!(9.0)));

        assert_eq!(map[&7], stat(5, dec!(1.5)));
    }

    #[test]
    fn max_count_replaces_on_strictly_higher_count() {
        let mut map = StatMap::new();
        MergePolicy::MaxCountWins.insert(&mut map, stat(3, dec!(1.0)));
        MergePolicy::MaxCountWins.insert(&mut map, stat(4, dec!(2.0)));

        assert_eq!(map[&7], stat(4, dec!(2.0)));
    }

    #[test]
    fn max_count_tie_keeps_first_price() {
        let first = stat(5, dec!(1.0));
        let chosen = MergePolicy::MaxCountWins.merge(Some(&first), stat(5, dec!(2.0)));
        assert_eq!(chosen, first);
    }

    #[test]
    fn last_wins_always_replaces() {
        let first = stat(9, dec!(1.0));
        let chosen = MergePolicy::LastWins.merge(Some(&first), stat(1, dec!(2.0)));
        assert_eq!(chosen, stat(1, dec!(2.0)));
    }

    #[test]
    fn projections_skip_missing_prices() {
        let mut map = StatMap::new();
        map.insert(1, MarketStat { item_id: 1, times_seen: 4, market_price: None });
        map.insert(2, MarketStat { item_id: 2, times_seen: 6, market_price: Some(dec!(3)) });

        assert_eq!(times_seen(&map).len(), 2);
        let prices = market_prices(&map);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[&2], dec!(3));
    }
}
