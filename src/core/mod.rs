// src/core/mod.rs
//! Core services: configuration, file system helpers and storage backends

pub mod config_manager;
pub mod database;
pub mod fs_ops;
pub mod kv_store;

pub use config_manager::{ConfigManager, ConfigOverrides};
pub use database::SqliteStore;
pub use fs_ops::FsOps;
pub use kv_store::{FileStore, KeyValueStore, MemoryStore, StoreBackend};

use anyhow::Result;
use std::sync::Arc;

/// Open the store selected by the configuration
pub async fn open_store(config: &ConfigManager) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.environment.store_backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => Arc::new(FileStore::new(config.store_file_path())),
        StoreBackend::Sqlite => Arc::new(SqliteStore::new(&config.database_path()).await?),
    };
    crate::app_log!(info, "Using {} store", store.backend_name());
    Ok(store)
}
