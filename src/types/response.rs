// src/types/response.rs
//! View structures handed to the renderer or serialized with `--json`

use serde::Serialize;

use crate::types::job::{Job, JobId};

// ===== Card Views =====

/// A job annotated with its saved/recent status
#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    pub job: Job,
    pub is_saved: bool,
    pub recently_viewed: bool,
    pub detail_path: String,
}

impl JobCard {
    pub fn new(job: &Job, is_saved: bool, recently_viewed: bool) -> Self {
        Self {
            job: job.clone(),
            is_saved,
            recently_viewed,
            detail_path: job.detail_path(),
        }
    }
}

/// Short entry used by the home page previews
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
}

impl From<&Job> for JobSummary {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
        }
    }
}

// ===== Page Views =====

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub count: usize,
    pub jobs: Vec<JobCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub recently_viewed: Vec<JobSummary>,
    pub saved_jobs: Vec<JobSummary>,
    pub results: SearchResults,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    pub job_id: JobId,
    pub saved: bool,
    pub title: String,
    pub description: String,
}
