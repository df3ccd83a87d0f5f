//! Spreadsheet-friendly CSV output.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::analysis::AnalysisReport;
use crate::domain::money::{format_copper, format_gold};
use crate::domain::{ArbitrageOpportunity, Bargain};
use crate::error::Result;

/// Paths of the three files written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub analysis: PathBuf,
    pub horde_bargains: PathBuf,
    pub alliance_bargains: PathBuf,
}

/// Local time formatted for report file names.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn write_opportunities<W: io::Write>(writer: W, opportunities: &[ArbitrageOpportunity]) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record([
        "Item Name",
        "Times Seen (Horde, Alliance)",
        "Horde Buyout Price",
        "Alliance Buyout Price",
        "Price Difference",
        "Horde Market Price",
        "Alliance Market Price",
        "Cheaper Buyout",
        "Cheaper Historic",
    ])?;

    for opp in opportunities {
        wtr.write_record([
            opp.item_name.clone(),
            format!("{}, {}", opp.horde_scan_count, opp.alliance_scan_count),
            format_gold(opp.horde_buyout_price),
            format_gold(opp.alliance_buyout_price),
            // Whole gold only.
            format!("{}g", opp.price_difference.round()),
            format_gold(opp.horde_market_price),
            format_gold(opp.alliance_market_price),
            opp.cheaper_buyout.to_string(),
            opp.cheaper_historic.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_bargains<W: io::Write>(writer: W, bargains: &[Bargain]) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["Item Name", "Buyout Price", "Count", "Seller"])?;
    for bargain in bargains {
        wtr.write_record([
            bargain.item_name.clone(),
            format_copper(bargain.buyout_price),
            bargain.count.to_string(),
            bargain.seller_name.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the analysis and both bargain lists into `dir`.
pub fn write_csv_reports(report: &AnalysisReport, dir: &Path, stamp: &str) -> Result<ReportFiles> {
    std::fs::create_dir_all(dir)?;
    let files = ReportFiles {
        analysis: dir.join(format!("ah_analysis_{stamp}.csv")),
        horde_bargains: dir.join(format!("horde_bargains_{stamp}.csv")),
        alliance_bargains: dir.join(format!("alliance_bargains_{stamp}.csv")),
    };

    write_opportunities(std::fs::File::create(&files.analysis)?, &report.opportunities)?;
    write_bargains(std::fs::File::create(&files.horde_bargains)?, &report.horde_bargains)?;
    write_bargains(
        std::fs::File::create(&files.alliance_bargains)?,
        &report.alliance_bargains,
    )?;

    info!(path = %files.analysis.display(), rows = report.opportunities.len(), "Wrote analysis report");
    Ok(files)
}
