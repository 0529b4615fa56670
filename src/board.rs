// src/board.rs
//! Job board service: catalog, persisted lists and notifications together

use anyhow::Result;
use std::sync::Arc;

use crate::app_log;
use crate::catalog::Catalog;
use crate::filter::filter_jobs;
use crate::id_set::{IdSetStore, RECENTLY_VIEWED, SAVED_JOBS};
use crate::notify::{Notification, Notifier};
use crate::types::{HomePage, Job, JobCard, JobId, JobSummary, SaveOutcome, SearchResults};
use crate::views;

pub struct JobBoard {
    catalog: Catalog,
    ids: IdSetStore,
    notifier: Arc<dyn Notifier>,
}

impl JobBoard {
    /// Create a board over a loaded catalog and an id list store
    pub fn new(catalog: Catalog, ids: IdSetStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            ids,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn id_sets(&self) -> &IdSetStore {
        &self.ids
    }

    /// Filter the catalog by `query` and annotate every match
    pub async fn search(&self, query: &str) -> SearchResults {
        let matched = filter_jobs(self.catalog.jobs(), query);
        app_log!(
            debug,
            "Query {:?} matched {} of {} jobs",
            query,
            matched.len(),
            self.catalog.len()
        );
        let jobs = views::annotate(&matched, &self.ids).await;
        SearchResults {
            query: query.to_string(),
            count: jobs.len(),
            jobs,
        }
    }

    /// Home page: both previews plus the search results for `query`
    pub async fn home(&self, query: &str) -> HomePage {
        HomePage {
            recently_viewed: views::recently_viewed_preview(&self.catalog, &self.ids).await,
            saved_jobs: views::saved_jobs_preview(&self.catalog, &self.ids).await,
            results: self.search(query).await,
        }
    }

    /// Save or unsave a job and raise the matching notification
    pub async fn toggle_save(&self, id: JobId) -> Result<SaveOutcome> {
        self.require_job(id)?;

        let saved = self.ids.toggle(SAVED_JOBS, id).await?;
        let notification = Notification::for_save_state(saved);
        self.notifier.notify(&notification);

        Ok(SaveOutcome {
            job_id: id,
            saved,
            title: notification.title,
            description: notification.description,
        })
    }

    /// Detail view of a job; records it as recently viewed
    pub async fn view(&self, id: JobId) -> Result<JobCard> {
        let job = self.require_job(id)?;
        self.ids.add(RECENTLY_VIEWED, id).await?;
        let is_saved = self.ids.contains(SAVED_JOBS, id).await;
        Ok(JobCard::new(job, is_saved, true))
    }

    /// Every catalog job in the saved list
    pub async fn saved(&self) -> Vec<JobSummary> {
        self.list(SAVED_JOBS).await
    }

    /// Every catalog job in the recently viewed list
    pub async fn recent(&self) -> Vec<JobSummary> {
        self.list(RECENTLY_VIEWED).await
    }

    /// Forget the list `name`
    pub async fn clear(&self, name: &str) -> Result<()> {
        self.ids.clear(name).await
    }

    async fn list(&self, name: &str) -> Vec<JobSummary> {
        let ids = self.ids.load(name).await;
        self.catalog
            .select(&ids)
            .into_iter()
            .map(JobSummary::from)
            .collect()
    }

    fn require_job(&self, id: JobId) -> Result<&Job> {
        self.catalog
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("Job not found: {}", id))
    }
}
