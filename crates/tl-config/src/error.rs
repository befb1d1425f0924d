//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// No platform config directory could be determined.
    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    /// Reading or writing the preference file failed.
    #[error("Preference file error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference could not be encoded as TOML.
    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

