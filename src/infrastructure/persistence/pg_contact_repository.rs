//! PostgreSQL implementation of the contact submission sink.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ContactDetails, ContactSubmission, NewContactSubmission};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// PostgreSQL repository for `contact_submissions`.
///
/// Both form variants share one table; columns that do not apply to a
/// variant are left NULL.
pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, submission: NewContactSubmission) -> Result<ContactSubmission, AppError> {
        let user_type = submission.details.user_type();
        let (organization, hiring_positions, roles, nationality) = match &submission.details {
            ContactDetails::HiringManager {
                organization,
                hiring_positions,
            } => (organization.as_deref(), hiring_positions.as_deref(), None, None),
            ContactDetails::JobSeeker { roles, nationality } => {
                (None, None, roles.as_deref(), nationality.as_deref())
            }
        };

        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO contact_submissions (
                name, email, message, user_type, organization, hiring_positions, roles, nationality
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, created_at
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .bind(user_type.as_str())
        .bind(organization)
        .bind(hiring_positions)
        .bind(roles)
        .bind(nationality)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ContactSubmission {
            id,
            name: submission.name,
            email: submission.email,
            message: submission.message,
            details: submission.details,
            created_at,
        })
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
