//! PostgreSQL implementation of the offering repository.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use super::raw_list;
use crate::domain::entities::Offering;
use crate::domain::repositories::OfferingRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct OfferingRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    hero_image: Option<String>,
    hero_title: Option<String>,
    hero_description: Option<String>,
    hero_bulletpoints: Option<Json<Value>>,
    is_active: bool,
    order_index: i32,
}

impl From<OfferingRow> for Offering {
    fn from(row: OfferingRow) -> Self {
        Offering {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            hero_image: row.hero_image,
            hero_title: row.hero_title,
            hero_description: row.hero_description,
            hero_bulletpoints: raw_list(row.hero_bulletpoints),
            is_active: row.is_active,
            order_index: row.order_index,
        }
    }
}

/// PostgreSQL repository for the `services` table.
pub struct PgOfferingRepository {
    pool: Arc<PgPool>,
}

impl PgOfferingRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferingRepository for PgOfferingRepository {
    async fn list_active(&self) -> Result<Vec<Offering>, AppError> {
        let rows = sqlx::query_as::<_, OfferingRow>(
            r#"
            SELECT id, title, slug, description, hero_image, hero_title, hero_description,
                   hero_bulletpoints, is_active, order_index
            FROM services
            WHERE is_active = TRUE
            ORDER BY order_index ASC, id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Offering::from).collect())
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Offering>, AppError> {
        let row = sqlx::query_as::<_, OfferingRow>(
            r#"
            SELECT id, title, slug, description, hero_image, hero_title, hero_description,
                   hero_bulletpoints, is_active, order_index
            FROM services
            WHERE slug = $1 AND is_active = TRUE
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Offering::from))
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services WHERE is_active = TRUE")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
