//! Repository trait for contact form submissions.

use crate::domain::entities::{ContactSubmission, NewContactSubmission};
use crate::error::AppError;
use async_trait::async_trait;

/// Write sink for `contact_submissions`.
///
/// Submissions are never read back by the site; [`Self::count`] exists for
/// the admin dashboard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts one submission.
    ///
    /// There is no idempotency key: two identical calls store two rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, submission: NewContactSubmission) -> Result<ContactSubmission, AppError>;

    /// Counts stored submissions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
