//! Durable key-value storage
//!
//! A small get/set contract shaped like browser local storage. The wheel
//! keeps its name list under a single key; the application injects the
//! backing store so tests can run against [`MemoryStore`].

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

/// String key-value store with synchronous reads and writes
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing was written yet
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// File-backed store: one JSON object of string values
///
/// The whole file is loaded on open and rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Default store location in the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "spinwheel", "SpinWheel")
            .map(|dirs| dirs.data_dir().join("storage.json"))
    }

    /// Open the store at `path`
    ///
    /// A missing file yields an empty store. A file that cannot be decoded
    /// is reported as [`StorageError::Parse`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| StorageError::Parse(e.to_string()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        Ok(Self { path, values })
    }

    /// Open the store at `path`, starting empty if the file is unreadable
    ///
    /// The broken file is left alone until the next write replaces it.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(
                    "Storage file {} unusable ({}), starting empty",
                    path.display(),
                    e
                );
                Self {
                    path,
                    values: BTreeMap::new(),
                }
            }
        }
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StorageError::Parse(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Errors that can occur with storage
#[derive(Debug, Clone)]
pub enum StorageError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}
