//! Local key-value storage for the wardrobe application
//!
//! This module provides the synchronous get/set/remove contract every store
//! persists through, with an in-memory backend and a file-backed backend
//! that keeps one JSON document per key.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Configuration for the local storage backend
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per key; `None` keeps everything in memory
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Create a new StorageConfig from environment variables
    ///
    /// # Environment Variables
    /// - `WARDROBE_STORAGE_DIR`: directory for persisted values (default: unset, in-memory)
    pub fn from_env() -> Self {
        let data_dir = std::env::var("WARDROBE_STORAGE_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        StorageConfig { data_dir }
    }
}

/// Synchronous key-value store holding structured values
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key, `None` when nothing is stored
    fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Store a value under a key, replacing any previous value
    fn set(&self, key: &str, value: Value) -> StorageResult<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Typed helpers layered over any [`KeyValueStore`]
pub trait KeyValueStoreExt: KeyValueStore {
    /// Get a value and decode it into `T`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Encode `value` and store it under `key`
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        self.set(key, serde_json::to_value(value)?)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Open the backend described by `config`
pub fn open_store(config: &StorageConfig) -> StorageResult<Arc<dyn KeyValueStore>> {
    match &config.data_dir {
        Some(dir) => Ok(Arc::new(FileStore::open(dir)?)),
        None => {
            info!("Using in-memory storage");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// In-memory backend, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// File-backed backend storing `<key>.json` under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        info!("File storage opened at {}", root.display());
        Ok(FileStore { root })
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        let path = self.path_for(key)?;
        // Write beside the target and rename so readers never see half a document
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&value)?)?;
        fs::rename(&tmp, &path)?;
        debug!("Stored key {} at {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
