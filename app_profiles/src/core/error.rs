//! Error types for loading, parsing and cleaning app datasets.

use polars::prelude::PolarsError;

/// Result type for dataset operations
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Error type for dataset operations
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Load error: {0}")]
    Load(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Schema error at row {row}, column '{column}': {message}")]
    Schema {
        row: usize,
        column: String,
        message: String,
    },

    #[error("Type coercion failed for '{identity}': {source}")]
    Coercion {
        identity: String,
        #[source]
        source: InstallsParseError,
    },

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "remote-sources")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure to normalise a formatted installs string such as `"10,000+"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstallsParseError {
    #[error("installs value is empty")]
    Empty,

    #[error("installs value '{0}' is not a non-negative integer")]
    Invalid(String),
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No app_profiles.toml found in standard locations")]
    NotFound,
}
