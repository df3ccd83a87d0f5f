//! Handler for the `inspect` command.

use crate::cli::{load_config, output, InspectArgs};
use crate::config::Config;
use crate::domain::money::{format_copper, format_gold};
use crate::error::{Error, Result};
use crate::extract::{load_scan, load_stats};

/// Execute the inspect command.
pub fn execute(args: &InspectArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.logging.init();

    match args.kind.stat_source() {
        None => inspect_scan(args, &config),
        Some(source) => {
            let stats = load_stats(&args.file, source);
            output::section(&format!("{source} statistics"));
            output::field("file", output::muted(args.file.display()));
            output::field("items", output::highlight(stats.len()));

            let mut entries: Vec<_> = stats.into_values().collect();
            entries.sort_by_key(|s| s.item_id);
            for stat in entries.iter().take(args.limit) {
                let price = stat
                    .market_price
                    .map_or_else(|| "-".to_string(), format_gold);
                output::field(
                    &stat.item_id.to_string(),
                    format!("seen {} price {price}", stat.times_seen),
                );
            }
            Ok(())
        }
    }
}

fn inspect_scan(args: &InspectArgs, config: &Config) -> Result<()> {
    let extraction = load_scan(&args.file, &config.extract).ok_or_else(|| Error::NoScanData {
        reason: format!("{} could not be read", args.file.display()),
    })?;

    output::section("Scan data");
    output::field("file", output::muted(args.file.display()));
    output::field("phase", extraction.phase);
    output::field("listings", output::highlight(extraction.listings.len()));
    output::field("skipped", extraction.skipped);

    let shown = &extraction.listings[..extraction.listings.len().min(args.limit)];
    output::json_value("listings", &shown);
    for listing in shown {
        output::field(
            &listing.item_id.to_string(),
            format!(
                "{} x{} buyout {} bid {} seller {}",
                listing.item_name,
                listing.count,
                format_copper(listing.buyout_price),
                format_copper(listing.bid_price),
                listing.seller_name
            ),
        );
    }
    Ok(())
}
