//! Auctionlord - cross-faction auction house arbitrage.
//!
//! Reads the Lua saved-variables files the Auctioneer addon writes for two
//! accounts on opposite factions, recovers current listings and historical
//! market statistics from them, and reports items whose market price differs
//! between the two auction houses.
//!
//! # Modules
//!
//! - [`domain`] - Listings, market statistics, opportunities and currency
//! - [`extract`] - Text extraction from scan data and stat files
//! - [`analysis`] - Grouping, price comparison and bargain lists
//! - [`config`] - TOML configuration and logging setup
//! - [`report`] - CSV files and terminal tables
//! - [`app`] - One end-to-end run over both factions
//! - [`cli`] - Command-line handlers
//!
//! # Example
//!
//! ```no_run
//! use auctionlord::config::Config;
//!
//! let config = Config::load("auctionlord.toml")?;
//! let outcome = auctionlord::app::run(&config)?;
//! println!("{} opportunities", outcome.report.opportunities.len());
//! # Ok::<(), auctionlord::error::Error>(())
//! ```

pub mod analysis;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod report;
