//! Market statistics from the Auc-Stat-* SavedVariables files.
//!
//! | Source | Record | Price | Count | Duplicates |
//! |---|---|---|---|---|
//! | StdDev | `[id] = "head:p1;p2;...;pn"` | last sample | samples | last wins |
//! | Histogram | `["id"] = "a!b!price!count!..."` | field 3 | field 4 | max count |
//! | Simple (seen) | `["id"] = "x@a;count;price;..."` | - | field 1 | max count |
//! | Simple (price) | same | field 2, may be fractional | - | last wins |

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::money::{copper_to_gold, decimal_copper_to_gold, parse_copper};
use crate::domain::{MarketStat, MergePolicy, StatMap};
use crate::error::ExtractError;

use super::source::read_source;

/// Semicolon field of a Simple record holding the sighting count.
pub const SIMPLE_SEEN_FIELD: usize = 1;
/// Semicolon field of a Simple record holding the price, in copper.
pub const SIMPLE_PRICE_FIELD: usize = 2;

/// One auxiliary statistics extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatSource {
    StdDev,
    Histogram,
    SimpleSeen,
    SimplePrice,
}

impl StatSource {
    pub fn label(&self) -> &'static str {
        match self {
            StatSource::StdDev => "stddev",
            StatSource::Histogram => "histogram",
            StatSource::SimpleSeen => "simple-seen",
            StatSource::SimplePrice => "simple-price",
        }
    }

    /// How repeated records for one item id are reconciled.
    pub fn policy(&self) -> MergePolicy {
        match self {
            StatSource::StdDev | StatSource::SimplePrice => MergePolicy::LastWins,
            StatSource::Histogram | StatSource::SimpleSeen => MergePolicy::MaxCountWins,
        }
    }

    fn pattern(&self) -> &'static Regex {
        static STDDEV: OnceLock<Regex> = OnceLock::new();
        static HISTOGRAM: OnceLock<Regex> = OnceLock::new();
        static SIMPLE: OnceLock<Regex> = OnceLock::new();

        match self {
            StatSource::StdDev => STDDEV.get_or_init(|| {
                Regex::new(r#"\[(\d+)\]\s*=\s*"[^:"]*:([^"]+)""#).expect("stddev pattern")
            }),
            StatSource::Histogram => HISTOGRAM.get_or_init(|| {
                Regex::new(r#"\["(\d+)"\]\s*=\s*"[^!"]+!([^!"]+)!(\d+)!(\d+)!"#)
                    .expect("histogram pattern")
            }),
            StatSource::SimpleSeen | StatSource::SimplePrice => SIMPLE.get_or_init(|| {
                Regex::new(r#"\["(\d+)"\]\s*=\s*"([^"]*)""#).expect("simple pattern")
            }),
        }
    }

    fn record(&self, caps: &Captures<'_>) -> Result<MarketStat, ExtractError> {
        match self {
            StatSource::StdDev => stddev_record(caps),
            StatSource::Histogram => histogram_record(caps),
            StatSource::SimpleSeen => simple_seen_record(caps),
            StatSource::SimplePrice => simple_price_record(caps),
        }
    }

    /// Scan `text` for this source's records.
    pub fn extract(&self, text: &str) -> StatMap {
        let policy = self.policy();
        let mut stats = StatMap::new();
        let mut skipped = 0usize;

        for caps in self.pattern().captures_iter(text) {
            match self.record(&caps) {
                Ok(stat) => policy.insert(&mut stats, stat),
                Err(e) => {
                    debug!(source = self.label(), error = %e, "Skipping stat record");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            debug!(source = self.label(), skipped, "Stat records skipped");
        }
        stats
    }
}

impl fmt::Display for StatSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn number<T: FromStr>(field: &'static str, text: &str) -> Result<T, ExtractError> {
    text.trim()
        .parse()
        .map_err(|_| ExtractError::malformed(format!("{field} {text:?} is not a number")))
}

fn stddev_record(caps: &Captures<'_>) -> Result<MarketStat, ExtractError> {
    let id = &caps[1];
    let item_id: u32 = number("item id", id)?;

    // The sample list follows the item's own id when it is repeated in the
    // payload, or precedes it when the id closes the payload. Without the
    // id it is the last colon segment.
    let segments: Vec<&str> = caps[2].split(':').collect();
    let samples = match segments.iter().position(|segment| *segment == id) {
        Some(i) => segments
            .get(i + 1)
            .or_else(|| i.checked_sub(1).and_then(|prev| segments.get(prev))),
        None => segments.last(),
    }
    .copied()
    .unwrap_or_default();

    let samples: Vec<&str> = samples
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let last = samples
        .last()
        .ok_or_else(|| ExtractError::malformed(format!("no price samples for {item_id}")))?;
    let price = parse_copper(last)
        .ok_or_else(|| ExtractError::malformed(format!("price {last:?} is not a number")))?;

    Ok(MarketStat {
        item_id,
        times_seen: u32::try_from(samples.len()).unwrap_or(u32::MAX),
        market_price: Some(copper_to_gold(price)),
    })
}

fn histogram_record(caps: &Captures<'_>) -> Result<MarketStat, ExtractError> {
    let price: u64 = number("price", &caps[3])?;
    Ok(MarketStat {
        item_id: number("item id", &caps[1])?,
        times_seen: number("count", &caps[4])?,
        market_price: Some(copper_to_gold(price)),
    })
}

/// Semicolon fields of a Simple record, with the `...@` prefix removed.
fn simple_fields(body: &str) -> Vec<&str> {
    let body = body.split_once('@').map_or(body, |(_, rest)| rest);
    body.split(';').collect()
}

fn simple_seen_record(caps: &Captures<'_>) -> Result<MarketStat, ExtractError> {
    let fields = simple_fields(&caps[2]);
    let seen = fields
        .get(SIMPLE_SEEN_FIELD)
        .ok_or_else(|| ExtractError::malformed("simple record has no count field"))?;
    Ok(MarketStat {
        item_id: number("item id", &caps[1])?,
        times_seen: number("count", seen)?,
        market_price: None,
    })
}

fn simple_price_record(caps: &Captures<'_>) -> Result<MarketStat, ExtractError> {
    let fields = simple_fields(&caps[2]);
    let price = fields
        .get(SIMPLE_PRICE_FIELD)
        .ok_or_else(|| ExtractError::malformed("simple record has no price field"))?;
    let copper: Decimal = number("price", price)?;
    let gold = decimal_copper_to_gold(copper)
        .ok_or_else(|| ExtractError::malformed(format!("negative price {copper}")))?;

    let times_seen = fields
        .get(SIMPLE_SEEN_FIELD)
        .and_then(|seen| seen.trim().parse().ok())
        .unwrap_or(0);

    Ok(MarketStat {
        item_id: number("item id", &caps[1])?,
        times_seen,
        market_price: Some(gold),
    })
}

/// Read `path` and extract `source` from it.
///
/// An unreadable file yields an empty map; statistics are optional input.
pub fn load_stats(path: &Path, source: StatSource) -> StatMap {
    info!(source = source.label(), path = %path.display(), "Processing stat file");
    let text = match read_source(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(source = source.label(), error = %e, "Stat file unavailable");
            return StatMap::new();
        }
    };

    let stats = source.extract(&text);
    info!(source = source.label(), items = stats.len(), "Found market data");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn stddev_takes_last_sample() {
        let text = r#"["12640"] = nil, [12640] = "0:15000;16000;17500", [2589] = "1:900""#;
        let stats = StatSource::StdDev.extract(text);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[&12640].market_price, Some(dec!(1.75)));
        assert_eq!(stats[&12640].times_seen, 3);
        assert_eq!(stats[&2589].market_price, Some(dec!(0.09)));
    }

    #[test]
    fn stddev_splits_on_repeated_id_key() {
        let text = r#"[4306] = "3:4306:100;200;300:9;9""#;
        let stats = StatSource::StdDev.extract(text);
        assert_eq!(stats[&4306].market_price, Some(dec!(0.03)));
    }

    #[test]
    fn stddev_trailing_id_key_is_not_a_sample() {
        let stats = StatSource::StdDev.extract(r#"[4306] = "0:100;200:4306""#);
        assert_eq!(stats[&4306].market_price, Some(dec!(0.02)));
        assert_eq!(stats[&4306].times_seen, 2);
    }

    #[test]
    fn stddev_lone_id_key_is_skipped() {
        let stats = StatSource::StdDev.extract(r#"[4306] = "0:4306""#);
        assert!(stats.is_empty());
    }

    #[test]
    fn stddev_later_record_replaces_earlier() {
        let text = r#"[7] = "0:100;200", [7] = "0:50""#;
        let stats = StatSource::StdDev.extract(text);
        assert_eq!(stats[&7].market_price, Some(dec!(0.005)));
    }

    #[test]
    fn stddev_skips_non_numeric_price() {
        let text = r#"[7] = "0:100;abc", [8] = "0:100""#;
        let stats = StatSource::StdDev.extract(text);
        assert!(!stats.contains_key(&7));
        assert!(stats.contains_key(&8));
    }

    #[test]
    fn histogram_keeps_max_count_and_its_price() {
        let text = r#"
            ["12640"] = "0@1!2!30000!5!16;1,2,3",
            ["12640"] = "0@1!2!99999!3!16;1,2,3",
        "#;
        let stats = StatSource::Histogram.extract(text);

        assert_eq!(stats[&12640].times_seen, 5);
        assert_eq!(stats[&12640].market_price, Some(dec!(3)));
    }

    #[test]
    fn simple_seen_reads_count_field() {
        let text = r#"["2589"] = "0@3;42;1234.5;x", ["2589"] = "0@3;40;1;x""#;
        let stats = StatSource::SimpleSeen.extract(text);

        assert_eq!(stats[&2589].times_seen, 42);
        assert_eq!(stats[&2589].market_price, None);
    }

    #[test]
    fn simple_price_reads_fractional_price_last_wins() {
        let text = r#"["2589"] = "0@3;42;1234.5;x", ["2589"] = "0@3;7;20000;x""#;
        let stats = StatSource::SimplePrice.extract(text);

        assert_eq!(stats[&2589].market_price, Some(dec!(2)));
        assert_eq!(stats[&2589].times_seen, 7);

        let first_only = StatSource::SimplePrice.extract(r#"["1"] = "0@3;42;1234.5""#);
        assert_eq!(first_only[&1].market_price, Some(dec!(0.12345)));
    }

    #[test]
    fn missing_file_yields_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let stats = load_stats(&dir.path().join("Auc-Stat-Histogram.lua"), StatSource::Histogram);
        assert!(stats.is_empty());
    }
}
