//! Contact form handling.

use std::sync::Arc;

use serde_json::json;
use validator::ValidateEmail;

use crate::application::defaults::present;
use crate::domain::entities::{ContactDetails, ContactSubmission, NewContactSubmission};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Validates and records contact form submissions.
///
/// Validation happens before the write, so a rejected submission never
/// leaves a partial row. Submissions are not deduplicated.
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Records a submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name or email is missing or
    /// the email is malformed; nothing is written in that case.
    /// Returns [`AppError::Internal`] if the store rejects the write.
    pub async fn submit(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, AppError> {
        let submission = Self::normalize(submission)?;
        let user_type = submission.details.user_type();

        let stored = self.repository.create(submission).await.inspect_err(|e| {
            tracing::error!(error = %e, %user_type, "Failed to store contact submission");
        })?;

        tracing::info!(id = stored.id, %user_type, "Contact submission recorded");
        Ok(stored)
    }

    fn normalize(submission: NewContactSubmission) -> Result<NewContactSubmission, AppError> {
        let name = submission.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Name is required",
                json!({"field": "name"}),
            ));
        }

        let email = submission.email.trim().to_string();
        if email.is_empty() {
            return Err(AppError::bad_request(
                "Email is required",
                json!({"field": "email"}),
            ));
        }
        if !email.validate_email() {
            return Err(AppError::bad_request(
                "Invalid email address",
                json!({"field": "email"}),
            ));
        }

        let details = match submission.details {
            ContactDetails::HiringManager {
                organization,
                hiring_positions,
            } => ContactDetails::HiringManager {
                organization: present(organization).map(|s| s.trim().to_string()),
                hiring_positions: present(hiring_positions).map(|s| s.trim().to_string()),
            },
            ContactDetails::JobSeeker { roles, nationality } => ContactDetails::JobSeeker {
                roles: present(roles).map(|s| s.trim().to_string()),
                nationality: present(nationality).map(|s| s.trim().to_string()),
            },
        };

        Ok(NewContactSubmission {
            name,
            email,
            message: submission.message.trim().to_string(),
            details,
        })
    }
}
