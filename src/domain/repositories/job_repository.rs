//! Repository trait for open positions.

use crate::domain::entities::Job;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to `jobs` for the careers page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Active jobs, `order_index` ascending.
    async fn list_active(&self) -> Result<Vec<Job>, AppError>;

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Job>, AppError>;

    async fn count_active(&self) -> Result<i64, AppError>;
}
