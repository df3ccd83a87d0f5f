//! Cross-faction arbitrage result type.

use serde::Serialize;

use super::faction::Faction;
use super::money::Gold;

/// One item name listed with a buyout on both factions.
///
/// Market prices come from the auxiliary stat feed when it knows the item,
/// otherwise from the mean of that faction's buyout listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArbitrageOpportunity {
    pub item_name: String,
    pub horde_market_price: Gold,
    pub alliance_market_price: Gold,
    /// Cheapest buyout on the Horde side.
    pub horde_buyout_price: Gold,
    /// Cheapest buyout on the Alliance side.
    pub alliance_buyout_price: Gold,
    /// Absolute gap between the two market prices.
    pub price_difference: Gold,
    pub cheaper_buyout: Faction,
    pub cheaper_historic: Faction,
    pub horde_scan_count: u32,
    pub alliance_scan_count: u32,
}
