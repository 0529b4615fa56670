// src/core/kv_store.rs
//! Key-value storage abstraction behind the identifier sets.
//!
//! Values are opaque strings, mirroring browser local storage: a missing key
//! reads as `None` and `set` replaces the whole value.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::sync::Mutex;

use crate::app_log;
use crate::core::FsOps;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    #[default]
    File,
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreBackend::Memory),
            "file" | "json" => Ok(StoreBackend::File),
            "sqlite" | "db" => Ok(StoreBackend::Sqlite),
            other => anyhow::bail!("Unsupported store backend: {}. Use memory, file or sqlite", other),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreBackend::Memory => "memory",
            StoreBackend::File => "file",
            StoreBackend::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

// ===== In-memory Store =====

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// ===== JSON File Store =====

/// All keys live in one JSON object file. Every `set` rewrites the file.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Corrupt content reads as an empty map; it is replaced on the next write
    async fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let Some(raw) = FsOps::read_optional(&self.path).await? else {
            return Ok(BTreeMap::new());
        };

        match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                app_log!(
                    warn,
                    "Ignoring unreadable store file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize store entries")?;
        FsOps::write_file_safe(&self.path, &content).await
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("savedJobs").await.unwrap(), None);

        store.set("savedJobs", "[1]").await.unwrap();
        assert_eq!(store.get("savedJobs").await.unwrap().as_deref(), Some("[1]"));

        store.remove("savedJobs").await.unwrap();
        assert_eq!(store.get("savedJobs").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        FileStore::new(&path).set("savedJobs", "[2,3]").await.unwrap();
        FileStore::new(&path).set("recentlyViewed", "[5]").await.unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("savedJobs").await.unwrap().as_deref(), Some("[2,3]"));
        assert_eq!(reopened.get("recentlyViewed").await.unwrap().as_deref(), Some("[5]"));
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_reads_empty_and_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("savedJobs").await.unwrap(), None);

        store.set("savedJobs", "[4]").await.unwrap();
        assert_eq!(store.get("savedJobs").await.unwrap().as_deref(), Some("[4]"));
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("SQLite".parse::<StoreBackend>().unwrap(), StoreBackend::Sqlite);
        assert_eq!("file".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("redis".parse::<StoreBackend>().is_err());
    }
}
