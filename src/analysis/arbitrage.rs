//! Cross-faction arbitrage ranking.
//!
//! Factions are joined on item name, not item id. Two items sharing a
//! display name are treated as one, and the market-price lookup uses the
//! id of the first Horde listing for that name.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{ArbitrageOpportunity, Faction, Gold, Listing};

use super::{group_by_name, FactionMarket};

/// One faction's side of a candidate item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SidePrices {
    market: Gold,
    buyout: Gold,
    scan_count: u32,
}

/// Price one faction's listings for an item, or `None` when none of them
/// has a buyout.
fn side_prices(group: &[&Listing], item_id: u32, market: &FactionMarket) -> Option<SidePrices> {
    let buyouts: Vec<Gold> = group
        .iter()
        .filter(|listing| listing.has_buyout())
        .map(|listing| listing.buyout_gold())
        .collect();
    let buyout = buyouts.iter().min().copied()?;

    let market_price = match market.market_prices.get(&item_id) {
        Some(price) => *price,
        None => buyouts.iter().sum::<Decimal>() / Decimal::from(buyouts.len()),
    };

    Some(SidePrices {
        market: market_price,
        buyout,
        scan_count: market.times_seen.get(&item_id).copied().unwrap_or(0),
    })
}

/// Rank items listed with a buyout on both factions by market-price gap.
///
/// Sorted by `price_difference` descending, then by item name.
pub fn analyze(horde: &FactionMarket, alliance: &FactionMarket) -> Vec<ArbitrageOpportunity> {
    let horde_groups = group_by_name(&horde.listings);
    let alliance_groups: HashMap<&str, Vec<&Listing>> =
        group_by_name(&alliance.listings).into_iter().collect();

    let common: Vec<_> = horde_groups
        .iter()
        .filter_map(|(name, horde_group)| {
            alliance_groups
                .get(name)
                .map(|alliance_group| (*name, horde_group, alliance_group))
        })
        .collect();
    info!(common = common.len(), "Found items on both factions");

    let mut opportunities: Vec<ArbitrageOpportunity> = common
        .into_iter()
        .filter_map(|(name, horde_group, alliance_group)| {
            let item_id = horde_group.first()?.item_id;
            let h = side_prices(horde_group, item_id, horde)?;
            let a = side_prices(alliance_group, item_id, alliance)?;

            Some(ArbitrageOpportunity {
                item_name: name.to_string(),
                horde_market_price: h.market,
                alliance_market_price: a.market,
                horde_buyout_price: h.buyout,
                alliance_buyout_price: a.buyout,
                price_difference: (h.market - a.market).abs(),
                cheaper_buyout: Faction::cheaper(h.buyout, a.buyout),
                cheaper_historic: Faction::cheaper(h.market, a.market),
                horde_scan_count: h.scan_count,
                alliance_scan_count: a.scan_count,
            })
        })
        .collect();

    opportunities.sort_by(|x, y| {
        y.price_difference
            .cmp(&x.price_difference)
            .then_with(|| x.item_name.cmp(&y.item_name))
    });

    info!(opportunities = opportunities.len(), "Ranked arbitrage opportunities");
    opportunities
}
