//! Persistent key-value store
//!
//! Holds the API credential and the quota flag across restarts. The
//! assistant only sees the `KeyValueStore` trait; `FileStore` backs the
//! server binary and `MemoryStore` backs tests and embedders.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, error, info};

/// Store key holding the Gemini API key
pub const API_KEY: &str = "gemini_api_key";

/// Store key holding the quota-exceeded flag (`"true"` when set)
pub const QUOTA_ERROR_KEY: &str = "gemini_api_quota_error";

/// String key-value storage. Writes are last-write-wins and never fail
/// from the caller's point of view.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&self, name: &str, value: &str);

    fn remove(&self, name: &str);
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }

    fn remove(&self, name: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}

/// JSON-file backed store. Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts empty; an unreadable
    /// or corrupt file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file: {:?}", path))?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse store file: {:?}", path))?
            }
        } else {
            debug!("Store file {:?} not found, starting empty", path);
            HashMap::new()
        };

        info!("Opened store at {:?} ({} entries)", path, entries.len());

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create store directory: {:?}", parent))?;
            }
        }

        let content = serde_json::to_string_pretty(entries).context("Failed to serialize store")?;

        // Readers only ever see a complete file
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write store file: {:?}", tmp_path))?;
        std::fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace store file: {:?}", self.path))?;

        Ok(())
    }

    fn mutate(&self, apply: impl FnOnce(&mut HashMap<String, String>) -> bool) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if !apply(&mut entries) {
            return;
        }
        if let Err(e) = self.persist(&entries) {
            error!("Store write failed, keeping in-memory state: {:#}", e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.mutate(|entries| {
            let previous = entries.insert(name.to_string(), value.to_string());
            previous.as_deref() != Some(value)
        });
    }

    fn remove(&self, name: &str) {
        self.mutate(|entries| {
            let removed = entries.remove(name).is_some();
            if !removed {
                debug!("Store key '{}' was not present", name);
            }
            removed
        });
    }
}
