//! One batch run: read both factions' files, analyze, return the report.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::analysis::{AnalysisReport, AuxStats, FactionMarket};
use crate::config::{Config, FactionPaths};
use crate::domain::Faction;
use crate::error::{ConfigError, Error, Result};
use crate::extract::{load_scan, load_stats, ExtractionPhase, StatSource};

/// What was read for one faction.
#[derive(Debug, Clone)]
pub struct FactionSummary {
    pub faction: Faction,
    pub scan_path: Option<PathBuf>,
    /// `false` when the scan file was missing or unreadable.
    pub available: bool,
    pub listings: usize,
    pub skipped: usize,
    pub phase: Option<ExtractionPhase>,
    pub priced_items: usize,
    pub seen_items: usize,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: AnalysisReport,
    pub horde: FactionSummary,
    pub alliance: FactionSummary,
}

/// Load every auxiliary stat file configured for a faction.
pub fn load_aux_stats(paths: &FactionPaths) -> AuxStats {
    let mut aux = AuxStats::new();
    if let Some(path) = paths.histogram() {
        aux.insert(StatSource::Histogram, load_stats(&path, StatSource::Histogram));
    }
    if let Some(path) = paths.stddev() {
        aux.insert(StatSource::StdDev, load_stats(&path, StatSource::StdDev));
    }
    if let Some(path) = paths.simple() {
        aux.insert(StatSource::SimpleSeen, load_stats(&path, StatSource::SimpleSeen));
        aux.insert(StatSource::SimplePrice, load_stats(&path, StatSource::SimplePrice));
    }
    aux
}

/// Read one faction's scan data and statistics.
pub fn load_faction(faction: Faction, config: &Config) -> (FactionMarket, FactionSummary) {
    let paths = config.factions.get(faction);
    let scan_path = paths.scan_data();

    info!(%faction, "Extracting auction data");
    let extraction = match &scan_path {
        Some(path) => load_scan(path, &config.extract),
        None => {
            warn!(%faction, "No scan data file configured");
            None
        }
    };

    let aux = load_aux_stats(paths);
    let times_seen = aux.times_seen(faction, &config.analysis.seen_sources);
    let market_prices = aux.market_prices(faction, &config.analysis.price_sources);

    let summary = FactionSummary {
        faction,
        scan_path,
        available: extraction.is_some(),
        listings: extraction.as_ref().map_or(0, |e| e.listings.len()),
        skipped: extraction.as_ref().map_or(0, |e| e.skipped),
        phase: extraction.as_ref().map(|e| e.phase),
        priced_items: market_prices.len(),
        seen_items: times_seen.len(),
    };

    let listings = extraction.map(|e| e.listings).unwrap_or_default();
    let market = FactionMarket::new(faction, listings)
        .with_times_seen(times_seen)
        .with_market_prices(market_prices);

    (market, summary)
}

/// Run the whole pipeline.
///
/// Fails when no faction has a scan file configured, or when neither
/// produced usable scan data; one missing faction just means there is
/// nothing to compare against.
pub fn run(config: &Config) -> Result<RunOutcome> {
    let configured = Faction::ALL
        .iter()
        .any(|&faction| config.factions.get(faction).scan_data().is_some());
    if !configured {
        return Err(ConfigError::MissingField { field: "scan_data" }.into());
    }

    let (horde, horde_summary) = load_faction(Faction::Horde, config);
    let (alliance, alliance_summary) = load_faction(Faction::Alliance, config);

    if !horde_summary.available && !alliance_summary.available {
        return Err(Error::NoScanData {
            reason: "scan data unavailable for both factions".into(),
        });
    }
    if horde.listings.is_empty() && alliance.listings.is_empty() {
        return Err(Error::NoScanData {
            reason: "no listings could be extracted; the file format may differ from what is expected".into(),
        });
    }

    info!(
        horde = horde.listings.len(),
        alliance = alliance.listings.len(),
        "Analyzing arbitrage opportunities"
    );
    let report = AnalysisReport::build(&horde, &alliance, config.analysis.bargain_limit);

    Ok(RunOutcome {
        report,
        horde: horde_summary,
        alliance: alliance_summary,
    })
}
