// src/catalog.rs
//! Fixed, in-memory job catalog loaded once at startup

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::app_log;
use crate::types::{Job, JobId};

const BUILTIN_CATALOG: &str = include_str!("../data/jobs.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    jobs: Vec<Job>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(jobs: Vec<Job>) -> Result<Self> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.id) {
                anyhow::bail!("Duplicate job id in catalog: {}", job.id);
            }
        }
        Ok(Self { jobs })
    }

    /// Catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Failed to parse built-in job catalog")
    }

    /// Parse a camelCase JSON array of jobs
    pub fn from_json(raw: &str) -> Result<Self> {
        let jobs: Vec<Job> = serde_json::from_str(raw).context("Invalid job catalog JSON")?;
        Self::new(jobs)
    }

    /// Read and parse a catalog file
    pub fn load_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        app_log!(
            info,
            "Loaded {} jobs from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the built-in dataset
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_file(p),
            None => Self::builtin(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Find a job by id
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs whose id is in `ids`, in catalog order. Unknown ids are skipped.
    pub fn select(&self, ids: &[JobId]) -> Vec<&Job> {
        self.jobs.iter().filter(|job| ids.contains(&job.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::job;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get(1).is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![job(1, "A", "X", &[]), job(1, "B", "Y", &[])]).unwrap_err();
        assert!(err.to_string().contains("Duplicate job id"));
    }

    #[test]
    fn test_select_follows_catalog_order_and_skips_stale_ids() {
        let catalog = Catalog::new(vec![
            job(1, "A", "X", &[]),
            job(2, "B", "X", &[]),
            job(3, "C", "X", &[]),
        ])
        .unwrap();

        let ids: Vec<JobId> = catalog.select(&[3, 99, 1]).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, BUILTIN_CATALOG).unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().unwrap().len());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Catalog::load_file(&dir.path().join("missing.json")).is_err());
    }
}
