//! Report output: CSV files and terminal tables.

mod csv;
mod table;

pub use self::csv::{timestamp, write_csv_reports, ReportFiles};
pub use table::{bargains_table, opportunities_table};
