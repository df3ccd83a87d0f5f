//! Configuration loading and validation.
//!
//! Configuration is read from a TOML file. Every section is optional; a run
//! still needs a scan data file for at least one faction, either from here
//! or from the command line.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::analysis::feed::{default_price_feeds, default_seen_feeds};
use crate::analysis::{PriceFeed, SeenFeed};
use crate::domain::Faction;
use crate::error::{ConfigError, Result};
use crate::extract::ScanOptions;

/// File names the addon writes into an account's `SavedVariables` directory.
pub const SCAN_DATA_FILE: &str = "auc-scandata.lua";
pub const HISTOGRAM_FILE: &str = "Auc-Stat-Histogram.lua";
pub const STDDEV_FILE: &str = "Auc-Stat-StdDev.lua";
pub const SIMPLE_FILE: &str = "Auc-Stat-Simple.lua";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub factions: FactionsConfig,
    #[serde(default)]
    pub extract: ScanOptions,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber. `RUST_LOG` takes precedence.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
            _ => {
                fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactionsConfig {
    #[serde(default)]
    pub horde: FactionPaths,
    #[serde(default)]
    pub alliance: FactionPaths,
}

impl FactionsConfig {
    pub fn get(&self, faction: Faction) -> &FactionPaths {
        match faction {
            Faction::Horde => &self.horde,
            Faction::Alliance => &self.alliance,
        }
    }

    pub fn get_mut(&mut self, faction: Faction) -> &mut FactionPaths {
        match faction {
            Faction::Horde => &mut self.horde,
            Faction::Alliance => &mut self.alliance,
        }
    }
}

/// Where one faction's files live.
///
/// `saved_variables` supplies the standard file names; an explicit path for
/// a single file overrides it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactionPaths {
    pub saved_variables: Option<PathBuf>,
    pub scan_data: Option<PathBuf>,
    pub histogram: Option<PathBuf>,
    pub stddev: Option<PathBuf>,
    pub simple: Option<PathBuf>,
}

impl FactionPaths {
    fn resolve(&self, explicit: &Option<PathBuf>, file_name: &str) -> Option<PathBuf> {
        explicit
            .clone()
            .or_else(|| self.saved_variables.as_ref().map(|dir| dir.join(file_name)))
    }

    pub fn scan_data(&self) -> Option<PathBuf> {
        self.resolve(&self.scan_data, SCAN_DATA_FILE)
    }

    pub fn histogram(&self) -> Option<PathBuf> {
        self.resolve(&self.histogram, HISTOGRAM_FILE)
    }

    pub fn stddev(&self) -> Option<PathBuf> {
        self.resolve(&self.stddev, STDDEV_FILE)
    }

    pub fn simple(&self) -> Option<PathBuf> {
        self.resolve(&self.simple, SIMPLE_FILE)
    }

    /// Every configured file, labelled, for reporting.
    pub fn files(&self) -> Vec<(&'static str, Option<PathBuf>)> {
        vec![
            ("scan data", self.scan_data()),
            ("histogram", self.histogram()),
            ("stddev", self.stddev()),
            ("simple", self.simple()),
        ]
    }
}

/// Analysis settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Market price feeds in order of preference.
    #[serde(default = "default_price_feeds")]
    pub price_sources: Vec<PriceFeed>,

    /// Sighting count feeds in order of preference.
    #[serde(default = "default_seen_feeds")]
    pub seen_sources: Vec<SeenFeed>,

    /// Maximum entries per faction bargain list.
    #[serde(default = "default_bargain_limit")]
    pub bargain_limit: usize,
}

fn default_bargain_limit() -> usize {
    100
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            price_sources: default_price_feeds(),
            seen_sources: default_seen_feeds(),
            bargain_limit: default_bargain_limit(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory the CSV files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_true")]
    pub write_csv: bool,

    /// Opportunities shown in the terminal table.
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

const fn default_true() -> bool {
    true
}

fn default_top() -> usize {
    25
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            write_csv: true,
            top: default_top(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges. Whether any scan file is configured is left to the
    /// run, since command-line overrides may still supply one.
    pub fn validate(&self) -> Result<()> {
        if self.extract.fallback_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fallback_threshold",
                reason: "must be at least 1, or the fallback phase can never run".into(),
            }
            .into());
        }
        if self.extract.fallback_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fallback_window",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.analysis.bargain_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "bargain_limit",
                reason: "must be positive".into(),
            }
            .into());
        }
        check_unique(&self.analysis.price_sources, "price_sources")?;
        check_unique(&self.analysis.seen_sources, "seen_sources")?;
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}

fn check_unique<T: std::fmt::Debug + Eq + std::hash::Hash>(
    feeds: &[T],
    field: &'static str,
) -> Result<()> {
    let mut seen = HashSet::new();
    for feed in feeds {
        if !seen.insert(feed) {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("{feed:?} listed more than once"),
            }
            .into());
        }
    }
    Ok(())
}
