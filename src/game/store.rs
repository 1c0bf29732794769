//! Key/value persistence for round state
//!
//! The game only needs `get`/`set` by string key. Values are JSON so a saved
//! round stays readable by other clients using the same keys.

use log::warn;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix of the key holding a round's status
pub const GAME_KEY_PREFIX: &str = "game-day-";
/// Prefix of the key holding a round's guess history
pub const GUESSES_KEY_PREFIX: &str = "guesses-day-";

/// Storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Capability the game uses to persist rounds
pub trait RoundStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    ///
    /// # Errors
    /// Returns `StoreError` if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Status key for a round id
#[must_use]
pub fn status_key(round_id: &str) -> String {
    format!("{GAME_KEY_PREFIX}{round_id}")
}

/// Guess history key for a round id
#[must_use]
pub fn guesses_key(round_id: &str) -> String {
    format!("{GUESSES_KEY_PREFIX}{round_id}")
}

/// In-memory store for tests and practice rounds
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoundStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk
///
/// The whole file is rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store, starting empty if the file does not exist yet
    ///
    /// A file that cannot be parsed is treated as empty and will be overwritten
    /// by the next `set`.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("ignoring unreadable store {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl RoundStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("xordle-store-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn keys_use_day_prefixes() {
        assert_eq!(status_key("42"), "game-day-42");
        assert_eq!(guesses_key("42"), "guesses-day-42");
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("game-day-1"), None);
        store.set("game-day-1", "\"Won\"".to_string()).unwrap();
        assert_eq!(store.get("game-day-1").as_deref(), Some("\"Won\""));
    }

    #[test]
    fn file_store_persists_across_opens() {
        let path = temp_path("persist.json");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("guesses-day-3", "[\"train\"]".to_string()).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("guesses-day-3").as_deref(),
            Some("[\"train\"]")
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("game-day-1"), None);
        fs::remove_file(&path).unwrap();
    }
}
