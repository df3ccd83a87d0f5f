//! Currency types and conversion between copper and gold.
//!
//! Prices arrive from the save files as a flat copper count. Reports show
//! them either as a decimal gold amount or split into gold/silver/copper.
//! One gold is 100 silver is 10 000 copper.
//!
//! The `Option`-returning functions are the API. The `format_*` helpers and
//! [`Denomination::parse_or_zero`] fall back to a zero value instead, which
//! keeps a half-matched record from taking the report down with it; callers
//! that need to tell "zero" from "unavailable" use the `Option` forms.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Flat price in the smallest currency unit.
pub type Copper = u64;

/// Price in decimal gold (major unit).
pub type Gold = Decimal;

pub const COPPER_PER_SILVER: u64 = 100;
pub const COPPER_PER_GOLD: u64 = 10_000;

/// A copper amount split into gold, silver and copper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Denomination {
    pub gold: u64,
    pub silver: u8,
    pub copper: u8,
}

impl Denomination {
    pub const ZERO: Self = Self {
        gold: 0,
        silver: 0,
        copper: 0,
    };

    /// Split a flat copper amount into its three tiers.
    pub fn from_copper(units: Copper) -> Self {
        let remainder = units % COPPER_PER_GOLD;
        Self {
            gold: units / COPPER_PER_GOLD,
            // Both tiers are < 100 by construction.
            silver: (remainder / COPPER_PER_SILVER) as u8,
            copper: (remainder % COPPER_PER_SILVER) as u8,
        }
    }

    /// Split a decimal gold amount, truncating below one copper.
    pub fn from_gold(gold: Gold) -> Option<Self> {
        gold_to_copper(gold).map(Self::from_copper)
    }

    /// Parse a copper amount written as plain digits.
    pub fn parse(text: &str) -> Option<Self> {
        parse_copper(text).map(Self::from_copper)
    }

    /// Like [`Denomination::parse`], but yields `0g 0s 0c` for garbage.
    pub fn parse_or_zero(text: &str) -> Self {
        Self::parse(text).unwrap_or(Self::ZERO)
    }

    pub fn to_copper(self) -> Copper {
        self.gold * COPPER_PER_GOLD
            + u64::from(self.silver) * COPPER_PER_SILVER
            + u64::from(self.copper)
    }

    pub fn to_gold(self) -> Gold {
        copper_to_gold(self.to_copper())
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g {}s {}c", self.gold, self.silver, self.copper)
    }
}

/// Convert copper to decimal gold: `gold + silver/100 + copper/10000`.
pub fn copper_to_gold(units: Copper) -> Gold {
    Decimal::from_i128_with_scale(i128::from(units), 4)
}

/// Convert a possibly fractional copper amount to decimal gold.
///
/// Returns `None` for negative amounts.
pub fn decimal_copper_to_gold(units: Decimal) -> Option<Gold> {
    if units.is_sign_negative() && !units.is_zero() {
        return None;
    }
    units.checked_div(Decimal::from(COPPER_PER_GOLD))
}

/// Convert decimal gold to copper, truncating toward zero.
///
/// Returns `None` for negative amounts and for values that do not fit.
pub fn gold_to_copper(gold: Gold) -> Option<Copper> {
    if gold.is_sign_negative() && !gold.is_zero() {
        return None;
    }
    gold.checked_mul(Decimal::from(COPPER_PER_GOLD))?
        .trunc()
        .to_u64()
}

/// Parse a copper amount from text. Only plain ASCII digits are accepted.
pub fn parse_copper(text: &str) -> Option<Copper> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Format copper as `Xg Ys Zc`.
pub fn format_copper(units: Copper) -> String {
    Denomination::from_copper(units).to_string()
}

/// Format decimal gold as `Xg Ys Zc`, or `0g 0s 0c` when it cannot be converted.
pub fn format_gold(gold: Gold) -> String {
    Denomination::from_gold(gold)
        .unwrap_or(Denomination::ZERO)
        .to_string()
}
