//! Careers page content.

use std::sync::Arc;

use crate::application::assembly::assemble_job;
use crate::application::views::JobView;
use crate::domain::entities::visible_in_order;
use crate::domain::repositories::JobRepository;

/// Open positions. Same degradation rules as the other listings.
pub struct JobService {
    repository: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_jobs(&self) -> Vec<JobView> {
        match self.repository.list_active().await {
            Ok(records) => visible_in_order(records).into_iter().map(assemble_job).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load jobs");
                Vec::new()
            }
        }
    }

    pub async fn get_job(&self, slug: &str) -> Option<JobView> {
        if slug.trim().is_empty() {
            return None;
        }

        match self.repository.find_active_by_slug(slug).await {
            Ok(record) => record
                .filter(|j| j.is_active && j.slug == slug)
                .map(assemble_job),
            Err(e) => {
                tracing::warn!(error = %e, slug, "Failed to load job");
                None
            }
        }
    }
}
