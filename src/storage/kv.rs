//! Key-value persistence surface
//!
//! The budget keeps its state under two string keys, each holding one JSON
//! document. Any synchronous string store can back it.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_text, write_text_atomic};

/// Key holding the serialized entry list
pub const ENTRIES_KEY: &str = "budgetEntries";

/// Key holding the partner name/color record
pub const SETTINGS_KEY: &str = "budgetSettings";

/// A synchronous string store keyed by name
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        (**self).set(key, value)
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// In-memory store, optionally limited to a total byte quota
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes once all values together would exceed
    /// `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            values: HashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Seed a raw value without quota checks
    pub fn insert_raw(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    fn used_without(&self, key: &str) -> usize {
        self.values
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(BudgetError::Persistence(format!(
                    "Storage quota exceeded writing '{}': {} of {} bytes",
                    key, needed, quota
                )));
            }
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get(ENTRIES_KEY).unwrap(), None);
        store.set(ENTRIES_KEY, "[]").unwrap();
        assert_eq!(store.get(ENTRIES_KEY).unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("budgetEntries.json").exists());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_memory_store_quota() {
        let mut store = MemoryStore::with_quota(10);
        store.set("k", "12345").unwrap();
        // Replacing a value only counts the new size
        store.set("k", "123456789").unwrap();

        let err = store.set("k", "1234567890").unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("123456789"));
    }
}
