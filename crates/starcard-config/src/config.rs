//! The `config.toml` schema.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use starcard_core::Theme;

use crate::{ConfigError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub appearance: AppearanceConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

/// What the card shows and where its links point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Display name; the avatar initials are derived from it.
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Link shared by the share action and copied by default.
    pub url: String,
    /// Overrides `url` for the copy action.
    pub copy_url: Option<String>,
    /// External program handed the link on share. Without one, sharing
    /// falls back to the clipboard.
    pub share_command: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Ferris Crab".to_string(),
            title: "Systems programmer".to_string(),
            tagline: "My business card".to_string(),
            url: "https://example.com".to_string(),
            copy_url: None,
            share_command: None,
        }
    }
}

impl ProfileConfig {
    /// Link used by the copy action.
    pub fn copy_link(&self) -> &str {
        self.copy_url.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme applied when no preference has been stored yet.
    pub default_theme: Theme,
}

/// Sky animation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Suppress the animation entirely.
    pub reduced_motion: bool,
    /// Physical pixels per CSS pixel.
    pub device_pixel_ratio: f32,
    /// CSS pixels covered by one terminal cell, horizontally.
    pub cell_width_px: u32,
    /// CSS pixels covered by one terminal cell, vertically.
    pub cell_height_px: u32,
    /// Repaint cadence.
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            device_pixel_ratio: 1.0,
            cell_width_px: 8,
            cell_height_px: 16,
            frame_interval_ms: 16,
        }
    }
}

impl AnimationConfig {
    /// Pixel ratio, falling back to 1 for non-positive or non-finite values.
    pub fn pixel_ratio(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file in the platform config directory.
    pub fn path() -> Option<PathBuf> {
        crate::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Load from the platform config directory. A missing file yields the
    /// defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
