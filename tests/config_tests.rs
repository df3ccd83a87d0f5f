use std::fs;
use std::path::PathBuf;

use auctionlord::analysis::{PriceFeed, SeenFeed};
use auctionlord::config::Config;
use auctionlord::domain::Faction;
use auctionlord::error::{ConfigError, Error};

const FULL: &str = r#"
[logging]
level = "debug"
format = "json"

[factions.horde]
saved_variables = "/wow/WTF/Account/HORDE/SavedVariables"

[factions.alliance]
scan_data = "/data/alliance-scan.lua"
stddev = "/data/alliance-sd.lua"

[extract]
fallback_threshold = 10
fallback_window = 300

[analysis]
price_sources = ["histogram", "stddev"]
seen_sources = ["simple"]
bargain_limit = 50

[report]
output_dir = "reports"
write_csv = false
top = 10
"#;

#[test]
fn full_config_parses() {
    let config = Config::parse(FULL).unwrap();

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.extract.fallback_threshold, 10);
    assert_eq!(config.extract.fallback_window, 300);
    assert_eq!(
        config.analysis.price_sources,
        vec![PriceFeed::Histogram, PriceFeed::StdDev]
    );
    assert_eq!(config.analysis.seen_sources, vec![SeenFeed::Simple]);
    assert_eq!(config.analysis.bargain_limit, 50);
    assert_eq!(config.report.output_dir, PathBuf::from("reports"));
    assert!(!config.report.write_csv);

    let horde = config.factions.get(Faction::Horde);
    assert_eq!(
        horde.scan_data(),
        Some(PathBuf::from(
            "/wow/WTF/Account/HORDE/SavedVariables/auc-scandata.lua"
        ))
    );
    let alliance = config.factions.get(Faction::Alliance);
    assert_eq!(alliance.scan_data(), Some(PathBuf::from("/data/alliance-scan.lua")));
    assert_eq!(alliance.histogram(), None);
}

#[test]
fn empty_config_is_valid() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.report.top, 25);
    assert!(config.factions.horde.scan_data().is_none());
}

#[test]
fn rejects_zero_fallback_threshold() {
    match Config::parse("[extract]\nfallback_threshold = 0\n") {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "fallback_threshold",
            ..
        })) => {}
        other => panic!("expected invalid fallback_threshold, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_log_format() {
    let result = Config::parse("[logging]\nlevel = \"info\"\nformat = \"xml\"\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
    ));
}

#[test]
fn rejects_unknown_feed() {
    let result = Config::parse("[analysis]\nprice_sources = [\"vendor\"]\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("auctionlord.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auctionlord.toml");
    fs::write(&path, FULL).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.report.top, 10);
}

#[test]
fn shipped_example_parses() {
    let config = Config::parse(include_str!("../config.toml.example")).unwrap();
    assert!(config.factions.horde.scan_data().is_some());
    assert!(config.factions.alliance.scan_data().is_some());
}
