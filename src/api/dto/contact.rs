//! DTOs for the contact form endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{ContactDetails, ContactSubmission, NewContactSubmission, UserType};
use crate::error::AppError;

/// Contact form payload.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation error naming it, rather than a generic body
/// rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(required(message = "Name is required"), length(max = 200))]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Email address is invalid")
    )]
    pub email: Option<String>,

    #[validate(length(max = 5000))]
    pub message: Option<String>,

    /// `hiring-manager` or `job-seeker`.
    #[validate(required(message = "User type is required"))]
    pub user_type: Option<String>,

    // Hiring manager
    #[validate(length(max = 200))]
    pub organization: Option<String>,
    #[validate(length(max = 1000))]
    pub hiring_positions: Option<String>,

    // Job seeker
    #[validate(length(max = 1000))]
    pub roles: Option<String>,
    #[validate(length(max = 100))]
    pub nationality: Option<String>,
}

impl ContactRequest {
    /// Converts a validated request into a domain submission.
    ///
    /// Fields that belong to the other form variant are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown `user_type`.
    pub fn into_submission(self) -> Result<NewContactSubmission, AppError> {
        let raw_type = self.user_type.unwrap_or_default();
        let user_type = UserType::parse(raw_type.trim()).ok_or_else(|| {
            AppError::bad_request(
                "Invalid or missing field: user_type",
                json!({"user_type": raw_type, "expected": ["hiring-manager", "job-seeker"]}),
            )
        })?;

        let details = match user_type {
            UserType::HiringManager => ContactDetails::HiringManager {
                organization: self.organization,
                hiring_positions: self.hiring_positions,
            },
            UserType::JobSeeker => ContactDetails::JobSeeker {
                roles: self.roles,
                nationality: self.nationality,
            },
        };

        Ok(NewContactSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            details,
        })
    }
}

/// Acknowledgement of a stored submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactResponse {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id,
            user_type: submission.details.user_type(),
            created_at: submission.created_at,
        }
    }
}
