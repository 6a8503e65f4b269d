//! PostgreSQL implementation of the testimonial repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Testimonial;
use crate::domain::repositories::TestimonialRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TestimonialRow {
    id: i64,
    text: String,
    image: Option<String>,
    name: String,
    role: String,
    company: Option<String>,
    is_featured: bool,
    created_at: DateTime<Utc>,
}

impl From<TestimonialRow> for Testimonial {
    fn from(row: TestimonialRow) -> Self {
        Testimonial {
            id: row.id,
            text: row.text,
            image: row.image,
            name: row.name,
            role: row.role,
            company: row.company,
            is_featured: row.is_featured,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for the `testimonials` table.
pub struct PgTestimonialRepository {
    pool: Arc<PgPool>,
}

impl PgTestimonialRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for PgTestimonialRepository {
    async fn list(&self, featured_only: bool) -> Result<Vec<Testimonial>, AppError> {
        let rows = sqlx::query_as::<_, TestimonialRow>(
            r#"
            SELECT id, text, image, name, role, company, is_featured, created_at
            FROM testimonials
            WHERE ($1 = FALSE OR is_featured = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(featured_only)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Testimonial::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
