//! Terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::money::{format_copper, format_gold};
use crate::domain::{ArbitrageOpportunity, Bargain};

#[derive(Tabled)]
struct OpportunityRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Seen (H, A)")]
    seen: String,
    #[tabled(rename = "Horde Buyout")]
    horde_buyout: String,
    #[tabled(rename = "Alliance Buyout")]
    alliance_buyout: String,
    #[tabled(rename = "Gap")]
    gap: String,
    #[tabled(rename = "Horde Market")]
    horde_market: String,
    #[tabled(rename = "Alliance Market")]
    alliance_market: String,
    #[tabled(rename = "Buy On")]
    cheaper: String,
}

#[derive(Tabled)]
struct BargainRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Buyout")]
    buyout: String,
    #[tabled(rename = "Count")]
    count: u32,
    #[tabled(rename = "Seller")]
    seller: String,
}

/// The first `top` opportunities as a table.
pub fn opportunities_table(opportunities: &[ArbitrageOpportunity], top: usize) -> String {
    let rows = opportunities.iter().take(top).map(|opp| OpportunityRow {
        item: opp.item_name.clone(),
        seen: format!("{}, {}", opp.horde_scan_count, opp.alliance_scan_count),
        horde_buyout: format_gold(opp.horde_buyout_price),
        alliance_buyout: format_gold(opp.alliance_buyout_price),
        gap: format_gold(opp.price_difference),
        horde_market: format_gold(opp.horde_market_price),
        alliance_market: format_gold(opp.alliance_market_price),
        cheaper: opp.cheaper_buyout.to_string(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// The first `top` bargains as a table.
pub fn bargains_table(bargains: &[Bargain], top: usize) -> String {
    let rows = bargains.iter().take(top).map(|b| BargainRow {
        item: b.item_name.clone(),
        buyout: format_copper(b.buyout_price),
        count: b.count,
        seller: b.seller_name.clone(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
