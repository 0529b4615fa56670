// src/core/fs_ops.rs
//! File system helpers shared by the file-backed store and configuration

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::app_log;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(info, "Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Read a file, `None` when it does not exist
    pub async fn read_optional(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }

    /// Write through a sibling temp file and rename, so readers never see a partial file
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        let tmp = Self::temp_sibling(path);
        fs::write(&tmp, content)
            .await
            .with_context(|| format!("Failed to write file: {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .await
            .with_context(|| format!("Failed to replace file: {}", path.display()))?;

        app_log!(debug, "Written file: {}", path.display());
        Ok(())
    }

    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }

    fn temp_sibling(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("store");
        path.with_file_name(format!(".{}.tmp", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_optional_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let got = FsOps::read_optional(&dir.path().join("nope.json")).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_write_creates_parent_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        FsOps::write_file_safe(&path, "first").await.unwrap();
        FsOps::write_file_safe(&path, "second").await.unwrap();

        assert_eq!(
            FsOps::read_optional(&path).await.unwrap().as_deref(),
            Some("second")
        );
        assert!(!dir.path().join("nested").join(".store.json.tmp").exists());
    }

    #[test]
    fn test_normalize_path() {
        let base = Path::new("/srv/app");
        assert_eq!(
            FsOps::normalize_path(base, Path::new("data")),
            PathBuf::from("/srv/app/data")
        );
        assert_eq!(
            FsOps::normalize_path(base, Path::new("/var/data")),
            PathBuf::from("/var/data")
        );
    }
}
