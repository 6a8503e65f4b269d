//! Repository trait for the services the company offers.

use crate::domain::entities::Offering;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to `services`.
///
/// Implementations return only active rows. Ordering by `order_index` is
/// expected but not trusted: the assembly layer re-sorts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOfferingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferingRepository: Send + Sync {
    /// Lists active records ordered by `order_index` ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_active(&self) -> Result<Vec<Offering>, AppError>;

    /// Finds the active record with the given slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Offering>, AppError>;

    /// Counts active records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_active(&self) -> Result<i64, AppError>;
}
