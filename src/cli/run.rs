//! Handler for the `run` command.

use tracing::info;

use crate::app::{self, FactionSummary};
use crate::cli::{load_config, output, RunArgs};
use crate::domain::Faction;
use crate::error::Result;
use crate::report::{bargains_table, opportunities_table, timestamp, write_csv_reports};

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut crate::config::Config, args: &RunArgs) {
    if let Some(dir) = &args.horde_dir {
        config.factions.get_mut(Faction::Horde).saved_variables = Some(dir.clone());
    }
    if let Some(dir) = &args.alliance_dir {
        config.factions.get_mut(Faction::Alliance).saved_variables = Some(dir.clone());
    }
    if let Some(dir) = &args.output_dir {
        config.report.output_dir = dir.clone();
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if args.no_csv {
        config.report.write_csv = false;
    }
    if let Some(top) = args.top {
        config.report.top = top;
    }
}

fn print_summary(summary: &FactionSummary) {
    output::section(&format!("{} scan", summary.faction));
    let path = summary
        .scan_path
        .as_ref()
        .map_or_else(|| "not configured".to_string(), |p| p.display().to_string());
    output::field("file", output::muted(path));
    if !summary.available {
        output::warning(&format!("{} scan data unavailable", summary.faction));
        return;
    }
    output::field("listings", output::highlight(summary.listings));
    if summary.skipped > 0 {
        output::field("skipped", summary.skipped);
    }
    if let Some(phase) = summary.phase {
        output::field("phase", phase);
    }
    output::field("priced items", summary.priced_items);
    output::field("seen items", summary.seen_items);
}

/// Execute the run command.
pub fn execute(args: &RunArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);
    config.validate()?;
    config.logging.init();

    info!(version = env!("CARGO_PKG_VERSION"), "auctionlord starting");
    output::header(env!("CARGO_PKG_VERSION"));

    let outcome = app::run(&config)?;
    print_summary(&outcome.horde);
    print_summary(&outcome.alliance);

    let report = &outcome.report;
    output::json_value("report", report);

    output::section("Arbitrage opportunities");
    if report.opportunities.is_empty() {
        output::note("No arbitrage opportunities found");
    } else {
        output::field("found", output::highlight(report.opportunities.len()));
        output::block(&opportunities_table(&report.opportunities, config.report.top));
    }

    let shown = config.report.top;
    output::section("Horde bargains");
    output::block(&bargains_table(&report.horde_bargains, shown));
    output::section("Alliance bargains");
    output::block(&bargains_table(&report.alliance_bargains, shown));

    if config.report.write_csv {
        let files = write_csv_reports(report, &config.report.output_dir, &timestamp())?;
        output::section("Reports");
        output::success(&format!("analysis {}", files.analysis.display()));
        output::success(&format!("horde bargains {}", files.horde_bargains.display()));
        output::success(&format!(
            "alliance bargains {}",
            files.alliance_bargains.display()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use clap::Parser;

    #[test]
    fn overrides_replace_config_values() {
        let cli = crate::cli::Cli::parse_from([
            "auctionlord",
            "run",
            "--horde-dir",
            "/wtf/h",
            "--json-logs",
            "--no-csv",
            "--top",
            "3",
            "--output-dir",
            "/tmp/out",
        ]);
        let crate::cli::Commands::Run(args) = cli.command else {
            panic!("expected run");
        };

        let mut config = Config::default();
        apply_overrides(&mut config, &args);

        assert_eq!(
            config.factions.horde.saved_variables,
            Some(std::path::PathBuf::from("/wtf/h"))
        );
        assert!(config.factions.alliance.saved_variables.is_none());
        assert_eq!(config.logging.format, "json");
        assert!(!config.report.write_csv);
        assert_eq!(config.report.top, 3);
        assert_eq!(config.report.output_dir, std::path::PathBuf::from("/tmp/out"));
    }
}
