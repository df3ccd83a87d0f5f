use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Extraction errors.
///
/// Never fatal: an unavailable source degrades to an empty result and a
/// malformed record is skipped, so these stay inside the extract layer.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record: {reason}")]
    RecordMalformed { reason: String },
}

impl ExtractError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::RecordMalformed {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no auction data found for either faction: {reason}")]
    NoScanData { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
