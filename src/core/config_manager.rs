// src/core/config_manager.rs
//! Configuration: optional config.yaml, environment variables, then CLI overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::kv_store::StoreBackend;
use crate::core::FsOps;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment_name: String,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnvironmentConfig {
    pub data_path: PathBuf,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub store_backend: StoreBackend,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

/// Overrides coming from command line flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub backend: Option<StoreBackend>,
    pub catalog: Option<PathBuf>,
}

impl ConfigManager {
    /// Load the configuration for the current environment, then apply env overrides
    pub fn load() -> Result<Self> {
        let environment_name = Self::get_environment();
        let config_path = std::env::var("JOBBOARD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = Self::load_from(&environment_name, &config_path, &base_dir)?;
        config.apply_env()?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("JOBBOARD_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Read `config_path` if it exists, otherwise fall back to defaults
    pub fn load_from(environment_name: &str, config_path: &Path, base_dir: &Path) -> Result<Self> {
        app_log!(debug, "Loading configuration for environment: {}", environment_name);

        let environment = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let file: ConfigFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            match environment_name {
                "production" => file.production,
                _ => file.local,
            }
        } else {
            Self::default_environment(environment_name, base_dir)
        };

        Ok(Self {
            environment_name: environment_name.to_string(),
            environment: environment.resolved(base_dir),
        })
    }

    fn default_environment(environment_name: &str, base_dir: &Path) -> EnvironmentConfig {
        let root = if environment_name == "production" {
            PathBuf::from("/app")
        } else {
            base_dir.to_path_buf()
        };

        EnvironmentConfig {
            data_path: root.join("data"),
            catalog_path: None,
            store_backend: StoreBackend::default(),
            log_path: None,
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var("JOBBOARD_DATA_DIR") {
            self.environment.data_path = PathBuf::from(dir);
        }
        if let Ok(backend) = std::env::var("JOBBOARD_BACKEND") {
            self.environment.store_backend = backend
                .parse()
                .context("Invalid JOBBOARD_BACKEND")?;
        }
        if let Ok(catalog) = std::env::var("JOBBOARD_CATALOG") {
            self.environment.catalog_path = Some(PathBuf::from(catalog));
        }
        Ok(())
    }

    /// Apply command line overrides on top of file and env values
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.data_dir {
            self.environment.data_path = dir;
        }
        if let Some(backend) = overrides.backend {
            self.environment.store_backend = backend;
        }
        if let Some(catalog) = overrides.catalog {
            self.environment.catalog_path = Some(catalog);
        }
        self
    }

    /// JSON file used by the `file` backend
    pub fn store_file_path(&self) -> PathBuf {
        self.environment.data_path.join("store.json")
    }

    /// SQLite database used by the `sqlite` backend
    pub fn database_path(&self) -> PathBuf {
        self.environment.data_path.join("jobboard.db")
    }

    /// Ensure the data directory and the log file directory exist
    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.environment.data_path).await?;
        if let Some(log_parent) = self.environment.log_path.as_ref().and_then(|p| p.parent()) {
            FsOps::ensure_dir_exists(log_parent).await?;
        }
        Ok(())
    }
}

impl EnvironmentConfig {
    fn resolved(self, base_dir: &Path) -> Self {
        Self {
            data_path: FsOps::normalize_path(base_dir, &self.data_path),
            catalog_path: self
                .catalog_path
                .map(|p| FsOps::normalize_path(base_dir, &p)),
            store_backend: self.store_backend,
            log_path: self.log_path.map(|p| FsOps::normalize_path(base_dir, &p)),
        }
    }
}
