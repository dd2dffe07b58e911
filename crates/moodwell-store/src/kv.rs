//! Key-value store trait with in-memory and JSON-file backends

use crate::error::StoreError;
use crate::io::atomic_write;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Storage collaborator: plain get/set plus prefix listing
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Values whose keys start with `prefix`, in key order
    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError>;
}

/// Load a typed record, `None` when the key is absent
pub fn load<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StoreError>
where
    T: for<'de> Deserialize<'de>,
{
    match store.get(key)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Save a typed record
pub fn save<T>(store: &mut dyn KeyValueStore, key: &str, record: &T) -> Result<(), StoreError>
where
    T: Serialize,
{
    let value = serde_json::to_value(record)?;
    store.set(key, value)
}

/// Load every record under a prefix, skipping entries that no longer parse
pub fn load_all<T>(store: &dyn KeyValueStore, prefix: &str) -> Result<Vec<T>, StoreError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    for value in store.get_by_prefix(prefix)? {
        match serde_json::from_value(value) {
            Ok(record) => records.push(record),
            Err(err) => tracing::warn!(prefix, %err, "skipping malformed record"),
        }
    }
    Ok(records)
}

fn collect_prefix(entries: &BTreeMap<String, Value>, prefix: &str) -> Vec<Value> {
    entries
        .range(prefix.to_string()..)
        .take_while(|(k, _)| k.starts_with(prefix))
        .map(|(_, v)| v.clone())
        .collect()
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        Ok(collect_prefix(&self.entries, prefix))
    }
}

/// Whole-file JSON object store, rewritten atomically on every `set`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened store");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, json.as_bytes())?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        Ok(collect_prefix(&self.entries, prefix))
    }
}
