use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading configuration or reading and writing
/// preferences.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid preference store {path}: {source}")]
    Preferences {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no usable home directory to store {0}")]
    NoHomeDir(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
