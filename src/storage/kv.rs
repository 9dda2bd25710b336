//! String key-value stores
//!
//! The wizard only ever persists its step index, so the store is a flat
//! string-to-string map, the same shape as browser local storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::file_io::{read_json, write_json_atomic};
use crate::error::StepformResult;

/// A persistent string key-value map
pub trait KeyValueStore {
    /// Look up the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> StepformResult<()>;

    /// Delete `key` if present
    fn remove(&mut self, key: &str) -> StepformResult<()>;
}

/// In-process store; nothing outlives the value
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StepformResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StepformResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten atomically on every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> StepformResult<Self> {
        let path = path.into();
        let entries = read_json(&path)?;
        Ok(Self { path, entries })
    }

    /// An empty store that will overwrite whatever is at `path` on first write
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StepformResult<()> {
        write_json_atomic(&self.path, &self.entries)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StepformResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StepformResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("currentStep"), None);

        store.set("currentStep", "2").unwrap();
        assert_eq!(store.get("currentStep").as_deref(), Some("2"));

        store.set("currentStep", "3").unwrap();
        assert_eq!(store.get("currentStep").as_deref(), Some("3"));

        store.remove("currentStep").unwrap();
        assert_eq!(store.get("currentStep"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("currentStep", "2").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("currentStep").as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_remove_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("currentStep", "3").unwrap();
        store.set("theme", "dark").unwrap();
        store.remove("currentStep").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("currentStep"), None);
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_remove_missing_key_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.remove("currentStep").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_open_corrupt_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "[1, 2").unwrap();

        assert!(JsonFileStore::open(&path).is_err());

        let mut fresh = JsonFileStore::empty(&path);
        fresh.set("currentStep", "1").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("currentStep").as_deref(), Some("1"));
    }
}
