//! PostgreSQL implementation of the job repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use super::raw_list;
use crate::domain::entities::Job;
use crate::domain::repositories::JobRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct JobRow {
    id: i64,
    title: String,
    slug: String,
    location: Option<String>,
    employment_type: Option<String>,
    description: String,
    requirements: Option<Json<Value>>,
    is_active: bool,
    order_index: i32,
    created_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: row.id,
            title: row.title,
            slug: row.slug,
            location: row.location,
            employment_type: row.employment_type,
            description: row.description,
            requirements: raw_list(row.requirements),
            is_active: row.is_active,
            order_index: row.order_index,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for the `jobs` table.
pub struct PgJobRepository {
    pool: Arc<PgPool>,
}

impl PgJobRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn list_active(&self) -> Result<Vec<Job>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, slug, location, employment_type, description, requirements,
                   is_active, order_index, created_at
            FROM jobs
            WHERE is_active = TRUE
            ORDER BY order_index ASC, id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Job>, AppError> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, slug, location, employment_type, description, requirements,
                   is_active, order_index, created_at
            FROM jobs
            WHERE slug = $1 AND is_active = TRUE
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Job::from))
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE is_active = TRUE")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
