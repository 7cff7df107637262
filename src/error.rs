//! Error types for configuration and parsing
//!
//! Logging itself never fails; these errors only come from loading configuration,
//! installing diagnostics, or parsing severity names.

use thiserror::Error;

/// Errors produced outside the dispatch path
#[derive(Error, Debug)]
pub enum NanoLogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to install diagnostics subscriber: {0}")]
    Diagnostics(String),

    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, NanoLogError>;
