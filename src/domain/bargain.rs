//! Cheapest buyout per item name within one faction.

use serde::Serialize;

use super::money::Copper;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bargain {
    pub item_id: u32,
    pub item_name: String,
    pub buyout_price: Copper,
    pub count: u32,
    pub seller_name: String,
}
