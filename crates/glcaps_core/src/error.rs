//! Error types for capability inspection

use std::path::PathBuf;

use thiserror::Error;

use crate::driver::DriverString;

/// Result type for capability operations.
pub type Result<T> = std::result::Result<T, CapsError>;

#[derive(Error, Debug)]
pub enum CapsError {
    /// The driver gave no answer at all for a query that must always succeed.
    #[error("driver returned no {} string", .0.label())]
    MissingDriverString(DriverString),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Settings(#[source] serde_json::Error),

    #[error("invalid driver report: {0}")]
    Report(#[source] serde_json::Error),

    #[error("unknown platform filter '{0}' (expected 'standard' or 'web-embedded')")]
    UnknownPlatform(String),
}
