use super::files::{atomic_write, ensure_flow_dir};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Storage key for the canonical task list (versioned schema)
pub const TASKS_KEY: &str = "tasks-v2";
/// Storage key of the pre-progress task schema, read only for migration
pub const LEGACY_TASKS_KEY: &str = "tasks";
pub const SETTINGS_KEY: &str = "energy-settings";
pub const ANALYTICS_KEY: &str = "energy-analytics";
pub const USER_STATE_KEY: &str = "user-state";
pub const LABELS_KEY: &str = "labels";
pub const QUICK_TODOS_KEY: &str = "quick-todos";

/// Error reading a single key
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A key-value store over a directory of JSON files, one file per key.
/// The terminal-app analogue of the browser's local storage.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store in the resolved flowstate directory
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: ensure_flow_dir()?,
        })
    }

    /// Open a store rooted at an explicit directory (used in tests)
    pub fn open_at(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Whether a key has ever been written
    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }

    /// Read a key. `Ok(None)` means the key was never written.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })?;
        let value = serde_json::from_str(&content).map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Read a key, falling back to a default when absent or unreadable.
    /// The default mirrors local storage semantics: first use sees the
    /// seed value, never an error.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                eprintln!("Warning: {}", e);
                default
            }
        }
    }

    /// Write a key atomically
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        atomic_write(self.key_path(key), &json)
    }

    /// Remove a key if present
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_get_or_returns_default_for_missing_key() {
        let (_dir, store) = test_store();
        let value = store.get_or(
            "missing",
            Sample {
                name: "seed".to_string(),
                count: 0,
            },
        );
        assert_eq!(value.name, "seed");
        assert!(!store.contains("missing"));
    }

    #[test]
    fn test_set_then_read_roundtrip() {
        let (_dir, store) = test_store();
        let value = Sample {
            name: "tasks".to_string(),
            count: 3,
        };

        store.set("sample", &value).unwrap();
        assert!(store.contains("sample"));

        let back: Sample = store.read("sample").unwrap().unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_read_reports_decode_errors() {
        let (_dir, store) = test_store();
        std::fs::write(store.key_path("broken"), "not json").unwrap();

        let result: Result<Option<Sample>, StoreError> = store.read("broken");
        assert!(matches!(result, Err(StoreError::Decode { .. })));

        // get_or falls back instead of failing
        let value = store.get_or(
            "broken",
            Sample {
                name: "fallback".to_string(),
                count: 0,
            },
        );
        assert_eq!(value.name, "fallback");
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = test_store();
        store.set("gone", &1u32).unwrap();
        assert!(store.contains("gone"));
        store.remove("gone").unwrap();
        assert!(!store.contains("gone"));
    }
}
