// src/id_set.rs
//! Persisted, deduplicated lists of job ids ("savedJobs", "recentlyViewed").
//!
//! Each list is stored under its name as a JSON array of integers. `load` never
//! fails: a missing, unreadable or malformed value is an empty list. Writes go
//! to the backing store immediately and replace the whole array; a backend read
//! error during a write aborts it.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::app_log;
use crate::core::KeyValueStore;
use crate::types::JobId;

pub const SAVED_JOBS: &str = "savedJobs";
pub const RECENTLY_VIEWED: &str = "recentlyViewed";

pub struct IdSetStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl IdSetStore {
    /// Wrap a key-value backend
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Ids stored under `name`, empty when the list is missing, unreadable or malformed
    pub async fn load(&self, name: &str) -> Vec<JobId> {
        match self.store.get(name).await {
            Ok(raw) => parse_ids(name, raw),
            Err(e) => {
                app_log!(warn, "Failed to read list {}: {:#}", name, e);
                Vec::new()
            }
        }
    }

    /// Whether `id` is in the list `name`
    pub async fn contains(&self, name: &str, id: JobId) -> bool {
        self.load(name).await.contains(&id)
    }

    /// Append `id` unless already present, then persist
    pub async fn add(&self, name: &str, id: JobId) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut ids = self.load_for_update(name).await?;
        if !ids.contains(&id) {
            ids.push(id);
            self.persist(name, &ids).await?;
        }
        Ok(())
    }

    /// Remove every occurrence of `id`, then persist
    pub async fn remove(&self, name: &str, id: JobId) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut ids = self.load_for_update(name).await?;
        let before = ids.len();
        ids.retain(|existing| *existing != id);
        if ids.len() != before {
            self.persist(name, &ids).await?;
        }
        Ok(())
    }

    /// Flip membership of `id`. Returns `true` when the id is now present.
    pub async fn toggle(&self, name: &str, id: JobId) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut ids = self.load_for_update(name).await?;

        let now_present = if ids.contains(&id) {
            ids.retain(|existing| *existing != id);
            false
        } else {
            ids.push(id);
            true
        };

        self.persist(name, &ids).await?;
        app_log!(debug, "Toggled {} in {}: present={}", id, name, now_present);
        Ok(now_present)
    }

    /// Drop the persisted list; the next load reads empty
    pub async fn clear(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.store
            .remove(name)
            .await
            .with_context(|| format!("Failed to clear list: {}", name))?;
        app_log!(info, "Cleared list {}", name);
        Ok(())
    }

    /// Read before a write. A backend error aborts the write so the stored
    /// list is never replaced by a partial one; malformed data still reads empty.
    async fn load_for_update(&self, name: &str) -> Result<Vec<JobId>> {
        let raw = self
            .store
            .get(name)
            .await
            .with_context(|| format!("Failed to read list: {}", name))?;
        Ok(parse_ids(name, raw))
    }

    async fn persist(&self, name: &str, ids: &[JobId]) -> Result<()> {
        let raw = serde_json::to_string(ids).context("Failed to serialize id list")?;
        self.store
            .set(name, &raw)
            .await
            .with_context(|| format!("Failed to persist list: {}", name))
    }
}

fn parse_ids(name: &str, raw: Option<String>) -> Vec<JobId> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<JobId>>(&raw) {
        Ok(ids) => dedup(ids),
        Err(e) => {
            app_log!(warn, "Ignoring malformed list {}: {}", name, e);
            Vec::new()
        }
    }
}

fn dedup(ids: Vec<JobId>) -> Vec<JobId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
