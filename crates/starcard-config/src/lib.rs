//! Configuration and preference storage for starcard.
//!
//! Settings live in a TOML file in the platform config directory. Runtime
//! preferences that the app writes back (the theme) live in a small
//! string-keyed JSON store in the data directory.

mod config;
mod error;
mod prefs;

pub use config::{AnimationConfig, AppearanceConfig, Config, LoggingConfig, ProfileConfig};
pub use error::{ConfigError, Result};
pub use prefs::{MemoryStorage, PreferenceStore, Storage};

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "starcard")
}

/// Directory holding `config.toml`.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Directory holding the preference store and the log file.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}
