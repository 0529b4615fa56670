// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::board::JobBoard;
use crate::catalog::Catalog;
use crate::core::{open_store, ConfigManager, ConfigOverrides, StoreBackend};
use crate::id_set::{IdSetStore, RECENTLY_VIEWED, SAVED_JOBS};
use crate::notify::LogNotifier;
use crate::render;
use crate::types::{JobId, JobSummary};

#[derive(Parser, Debug)]
#[command(name = "jobboard", version, about = "Browse, search and save job listings")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Directory holding the persisted lists")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Storage backend: memory, file or sqlite")]
    pub backend: Option<StoreBackend>,

    #[arg(long, global = true, help = "Job catalog JSON file (defaults to the built-in list)")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search jobs by title, company or skill
    Search { query: Option<String> },
    /// Home page: recently viewed, saved jobs and the job list
    Home {
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Show a job and record it as recently viewed
    View { id: JobId },
    /// Save a job, or unsave it when already saved
    Save { id: JobId },
    /// List saved jobs
    Saved,
    /// List recently viewed jobs
    Recent,
    /// Forget a list
    Clear { list: ListName },
    /// List every job in the catalog
    Catalog,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ListName {
    Saved,
    Recent,
}

impl ListName {
    pub fn storage_key(self) -> &'static str {
        match self {
            ListName::Saved => SAVED_JOBS,
            ListName::Recent => RECENTLY_VIEWED,
        }
    }
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            backend: self.backend,
            catalog: self.catalog.clone(),
        }
    }
}

pub async fn build_board(config: &ConfigManager) -> Result<JobBoard> {
    let catalog = Catalog::load(config.environment.catalog_path.as_deref())
        .context("Failed to load job catalog")?;
    let store = open_store(config).await?;
    Ok(JobBoard::new(
        catalog,
        IdSetStore::new(store),
        Arc::new(LogNotifier),
    ))
}

pub async fn handle_command(cli: Cli, config: &ConfigManager) -> Result<()> {
    let board = build_board(config).await?;
    let json = cli.json;

    match cli.command {
        Command::Search { query } => {
            let results = board.search(query.as_deref().unwrap_or("")).await;
            emit(json, &results, || render::search_results(&results))?;
        }

        Command::Home { query } => {
            let page = board.home(query.as_deref().unwrap_or("")).await;
            emit(json, &page, || render::home_page(&page))?;
        }

        Command::View { id } => {
            let card = board.view(id).await?;
            emit(json, &card, || render::job_card(&card))?;
        }

        Command::Save { id } => {
            let outcome = board.toggle_save(id).await?;
            emit(json, &outcome, || render::save_outcome(&outcome))?;
        }

        Command::Saved => {
            let jobs = board.saved().await;
            emit(json, &jobs, || list_or_empty("Saved Jobs", &jobs, "No saved jobs."))?;
        }

        Command::Recent => {
            let jobs = board.recent().await;
            emit(json, &jobs, || {
                list_or_empty("Recently Viewed", &jobs, "No recently viewed jobs.")
            })?;
        }

        Command::Clear { list } => {
            board.clear(list.storage_key()).await?;
            let cleared = serde_json::json!({ "cleared": list.storage_key() });
            emit(json, &cleared, || format!("Cleared {}", list.storage_key()))?;
        }

        Command::Catalog => {
            let jobs: Vec<JobSummary> = board.catalog().jobs().iter().map(JobSummary::from).collect();
            emit(json, &jobs, || render::summary_section("Catalog", &jobs))?;
        }
    }

    Ok(())
}

fn list_or_empty(heading: &str, jobs: &[JobSummary], empty: &str) -> String {
    if jobs.is_empty() {
        empty.to_string()
    } else {
        render::summary_section(heading, jobs)
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", out);
    } else {
        println!("{}", text().trim_end());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jobboard", "save", "2", "--backend", "sqlite", "--json", "--data-dir", "/tmp/jb",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(matches!(cli.command, Command::Save { id: 2 }));
        let overrides = cli.overrides();
        assert_eq!(overrides.backend, Some(StoreBackend::Sqlite));
        assert_eq!(overrides.data_dir, Some(PathBuf::from("/tmp/jb")));
    }

    #[test]
    fn test_parse_search_without_query() {
        let cli = Cli::try_parse_from(["jobboard", "search"]).unwrap();
        assert!(matches!(cli.command, Command::Search { query: None }));
    }

    #[test]
    fn test_rejects_unknown_backend_and_list() {
        assert!(Cli::try_parse_from(["jobboard", "saved", "--backend", "redis"]).is_err());
        assert!(Cli::try_parse_from(["jobboard", "clear", "everything"]).is_err());
    }

    #[test]
    fn test_list_storage_keys() {
        assert_eq!(ListName::Saved.storage_key(), "savedJobs");
        assert_eq!(ListName::Recent.storage_key(), "recentlyViewed");
    }

    #[tokio::test]
    async fn test_build_board_with_file_backend_persists_saves() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load_from("local", &dir.path().join("none.yaml"), dir.path())
            .unwrap();

        let board = build_board(&config).await.unwrap();
        assert!(board.toggle_save(1).await.unwrap().saved);

        let reopened = build_board(&config).await.unwrap();
        let saved: Vec<JobId> = reopened.saved().await.iter().map(|j| j.id).collect();
        assert_eq!(saved, vec![1]);
    }
}
