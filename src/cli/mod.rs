//! Command-line interface definitions.

pub mod check;
pub mod inspect;
pub mod output;
pub mod run;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::error::Result;
use crate::extract::StatSource;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "auctionlord.toml";

/// Cross-faction auction house arbitrage from Auctioneer saved variables
#[derive(Parser, Debug)]
#[command(name = "auctionlord")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract both factions' data and report arbitrage opportunities
    Run(RunArgs),

    /// Dump what a single saved-variables file yields
    Inspect(InspectArgs),

    /// Validate configuration and report which files are present
    Check(ConfigPathArg),
}

#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Horde account SavedVariables directory
    #[arg(long)]
    pub horde_dir: Option<PathBuf>,

    /// Alliance account SavedVariables directory
    #[arg(long)]
    pub alliance_dir: Option<PathBuf>,

    /// Directory for CSV reports
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Skip writing CSV files
    #[arg(long)]
    pub no_csv: bool,

    /// Number of opportunities shown in the terminal
    #[arg(long)]
    pub top: Option<usize>,
}

/// Which kind of file `inspect` should read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InspectKind {
    /// Scan data: current listings
    Scan,
    /// Histogram statistics: sighting counts
    Histogram,
    /// Standard deviation statistics: market prices
    Stddev,
    /// Simple statistics, sighting counts
    SimpleSeen,
    /// Simple statistics, market prices
    SimplePrice,
}

impl InspectKind {
    /// The stat source behind this kind, or `None` for scan data.
    pub fn stat_source(self) -> Option<StatSource> {
        match self {
            Self::Scan => None,
            Self::Histogram => Some(StatSource::Histogram),
            Self::Stddev => Some(StatSource::StdDev),
            Self::SimpleSeen => Some(StatSource::SimpleSeen),
            Self::SimplePrice => Some(StatSource::SimplePrice),
        }
    }
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// File to read
    pub file: PathBuf,

    /// What the file contains
    #[arg(short, long, value_enum, default_value = "scan")]
    pub kind: InspectKind,

    /// Number of entries to print
    #[arg(long, default_value = "20")]
    pub limit: usize,

    /// Path to configuration file (for extraction settings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Load the given config file, else `auctionlord.toml` if present, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                Config::load(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_overrides() {
        let cli = Cli::parse_from([
            "auctionlord",
            "run",
            "--horde-dir",
            "/h",
            "--alliance-dir",
            "/a",
            "--no-csv",
            "--top",
            "5",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.horde_dir, Some(PathBuf::from("/h")));
        assert!(args.no_csv);
        assert_eq!(args.top, Some(5));
    }

    #[test]
    fn inspect_kind_defaults_to_scan() {
        let cli = Cli::parse_from(["auctionlord", "--json", "inspect", "scan.lua"]);
        assert!(cli.json);
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.kind, InspectKind::Scan);
        assert_eq!(args.kind.stat_source(), None);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
