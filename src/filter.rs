// src/filter.rs
//! Case-insensitive substring filter over title, company and skills

use crate::types::Job;

/// True when `query` is contained in the title, the company or any skill.
/// `needle` must already be lowercased.
fn matches_lowercased(job: &Job, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job.company.to_lowercase().contains(needle)
        || job
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
}

/// Empty or whitespace-only
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Jobs matching `query`, in catalog order. A blank query returns everything.
pub fn filter_jobs<'a>(jobs: &'a [Job], query: &str) -> Vec<&'a Job> {
    if is_blank(query) {
        return jobs.iter().collect();
    }

    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| matches_lowercased(job, &needle))
        .collect()
}
