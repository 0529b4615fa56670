// src/views.rs
//! Read-only projections of the catalog through the persisted id lists

use crate::catalog::Catalog;
use crate::id_set::{IdSetStore, RECENTLY_VIEWED, SAVED_JOBS};
use crate::types::{Job, JobCard, JobId, JobSummary};

pub const PREVIEW_LIMIT: usize = 3;

/// Catalog jobs listed in `ids`, in catalog order, at most `limit`.
/// Stale ids are dropped.
pub fn preview<'a>(catalog: &'a Catalog, ids: &[JobId], limit: usize) -> Vec<&'a Job> {
    catalog.select(ids).into_iter().take(limit).collect()
}

// TODO: order by view time once views are recorded with a timestamp
pub async fn recently_viewed_preview(catalog: &Catalog, ids: &IdSetStore) -> Vec<JobSummary> {
    let recent = ids.load(RECENTLY_VIEWED).await;
    preview(catalog, &recent, PREVIEW_LIMIT)
        .into_iter()
        .map(JobSummary::from)
        .collect()
}

pub async fn saved_jobs_preview(catalog: &Catalog, ids: &IdSetStore) -> Vec<JobSummary> {
    let saved = ids.load(SAVED_JOBS).await;
    preview(catalog, &saved, PREVIEW_LIMIT)
        .into_iter()
        .map(JobSummary::from)
        .collect()
}

/// Annotate jobs with their saved/recent status, loading each list once
pub async fn annotate(jobs: &[&Job], ids: &IdSetStore) -> Vec<JobCard> {
    let saved = ids.load(SAVED_JOBS).await;
    let recent = ids.load(RECENTLY_VIEWED).await;
    jobs.iter()
        .map(|job| JobCard::new(job, saved.contains(&job.id), recent.contains(&job.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStore;
    use crate::test_support::job;
    use std::sync::Arc;

    fn catalog() -> Catalog {
        Catalog::new(
            (1..=6)
                .map(|id| job(id, &format!("Job {}", id), "Acme", &[]))
                .collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_recent_preview_skips_stale_ids() {
        let catalog = catalog();
        let ids = IdSetStore::new(Arc::new(MemoryStore::new()));
        ids.add(RECENTLY_VIEWED, 5).await.unwrap();
        ids.add(RECENTLY_VIEWED, 99).await.unwrap();

        let preview = recently_viewed_preview(&catalog, &ids).await;
        let got: Vec<JobId> = preview.iter().map(|j| j.id).collect();
        assert_eq!(got, vec![5]);
    }

    #[tokio::test]
    async fn test_saved_preview_truncates_in_catalog_order() {
        let catalog = catalog();
        let ids = IdSetStore::new(Arc::new(MemoryStore::new()));
        for id in [6, 2, 4, 1] {
            ids.add(SAVED_JOBS, id).await.unwrap();
        }

        let got: Vec<JobId> = saved_jobs_preview(&catalog, &ids)
            .await
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(got, vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_empty_lists_give_empty_previews() {
        let catalog = catalog();
        let ids = IdSetStore::new(Arc::new(MemoryStore::new()));
        assert!(recently_viewed_preview(&catalog, &ids).await.is_empty());
        assert!(saved_jobs_preview(&catalog, &ids).await.is_empty());
    }

    #[tokio::test]
    async fn test_annotate_marks_saved_and_recent() {
        let catalog = catalog();
        let ids = IdSetStore::new(Arc::new(MemoryStore::new()));
        ids.add(SAVED_JOBS, 2).await.unwrap();
        ids.add(RECENTLY_VIEWED, 3).await.unwrap();

        let jobs: Vec<&Job> = catalog.jobs().iter().take(3).collect();
        let cards = annotate(&jobs, &ids).await;

        let flags: Vec<(bool, bool)> = cards
            .iter()
            .map(|c| (c.is_saved, c.recently_viewed))
            .collect();
        assert_eq!(flags, vec![(false, false), (true, false), (false, true)]);
        assert_eq!(cards[1].detail_path, "/job/2");
    }
}
