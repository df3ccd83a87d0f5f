//! Auction-house domain types.

mod bargain;
mod faction;
mod listing;
mod opportunity;

pub mod money;
pub mod stat;

pub use bargain::Bargain;
pub use faction::Faction;
pub use listing::{Listing, UNKNOWN_SELLER};
pub use money::{Copper, Denomination, Gold};
pub use opportunity::ArbitrageOpportunity;
pub use stat::{MarketStat, MergePolicy, StatMap};
