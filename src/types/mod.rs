// src/types/mod.rs
pub mod job;
pub mod response;

pub use job::{CompanyInfo, Education, ExperienceRange, Job, JobId, WorkMode};
pub use response::{HomePage, JobCard, JobSummary, SaveOutcome, SearchResults};
