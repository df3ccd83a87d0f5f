//! Handler for the `check` command.

use crate::cli::{load_config, output, ConfigPathArg};
use crate::domain::Faction;
use crate::error::Result;

/// Validate configuration and report which configured files exist.
///
/// Validation failures propagate; missing files are only reported, since a
/// run tolerates absent statistics and one absent faction.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    output::success("Configuration is valid");

    let mut any_scan = false;
    for faction in Faction::ALL {
        output::section(&format!("{faction} files"));
        for (label, path) in config.factions.get(faction).files() {
            match path {
                Some(path) if path.is_file() => {
                    any_scan |= label == "scan data";
                    output::success(&format!("{label} {}", path.display()));
                }
                Some(path) => output::warning(&format!("{label} missing: {}", path.display())),
                None => output::field(label, output::muted("not configured")),
            }
        }
    }

    if !any_scan {
        output::warning("No scan data file found for either faction");
    }
    output::field("output dir", config.report.output_dir.display());
    Ok(())
}
