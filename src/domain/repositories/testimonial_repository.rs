//! Repository trait for testimonials.

use crate::domain::entities::Testimonial;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to `testimonials`.
///
/// Testimonials have no active flag or display index; they are shown newest
/// first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Lists testimonials ordered by `created_at` descending.
    ///
    /// When `featured_only` is true, only rows with `is_featured = true` are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, featured_only: bool) -> Result<Vec<Testimonial>, AppError>;

    /// Counts all testimonials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
