//! String-keyed preference storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ConfigError, Result};

const PREFS_FILE: &str = "prefs.json";

/// A string-keyed, string-valued store.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile storage, for tests and for running without a home directory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a flat JSON object. Every `set` writes through.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Open the store in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dir = crate::data_dir().ok_or(ConfigError::NoHomeDir("preferences"))?;
        Self::open(dir.join(PREFS_FILE))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|source| ConfigError::Preferences {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            ConfigError::Preferences {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, text).map_err(io_err)
    }
}

impl Storage for PreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
