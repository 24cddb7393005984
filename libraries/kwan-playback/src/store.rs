//! Key-value stores for the persisted player snapshot
//!
//! The player only ever reads and writes whole string values by key, which
//! maps directly onto browser `localStorage`/`sessionStorage` and onto a
//! small JSON file on desktop.

use crate::error::{PlaybackError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// String-keyed persistence backend
pub trait ConfigStore {
    /// Read the value stored under `key`, `None` when absent
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Session-scoped store kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Permanent store backed by one JSON object file (`{"key": "value", ...}`)
///
/// The file is re-read on every load so several players can share it.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                PlaybackError::Store(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfigStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), key, "Saved to file store");
        Ok(())
    }
}
