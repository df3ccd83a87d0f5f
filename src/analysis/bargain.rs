//! Cheapest buyout per item within one faction.

use crate::domain::{Bargain, Listing};

use super::group_by_name;

/// Cheapest buyout listing per item name, ascending by price, at most `limit`.
///
/// Bid-only listings never count. Among equally cheap listings for a name
/// the first one wins.
pub fn bargains(listings: &[Listing], limit: usize) -> Vec<Bargain> {
    let mut bargains: Vec<Bargain> = group_by_name(listings)
        .into_iter()
        .filter_map(|(name, group)| {
            group
                .into_iter()
                .filter(|listing| listing.has_buyout())
                .min_by_key(|listing| listing.buyout_price)
                .map(|listing| Bargain {
                    item_id: listing.item_id,
                    item_name: name.to_string(),
                    buyout_price: listing.buyout_price,
                    count: listing.count,
                    seller_name: listing.seller_name.clone(),
                })
        })
        .collect();

    bargains.sort_by_key(|bargain| bargain.buyout_price);
    bargains.truncate(limit);
    bargains
}
