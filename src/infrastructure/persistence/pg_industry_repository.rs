//! PostgreSQL implementation of the industry repository.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use super::raw_list;
use crate::domain::entities::{ApproachItem, Industry};
use crate::domain::repositories::IndustryRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct IndustryRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    image: Option<String>,
    bullet_points: Option<Json<Value>>,
    is_active: bool,
    order_index: i32,
    hero_title: Option<String>,
    hero_description: Option<String>,
    hero_industry_label: Option<String>,
    approach_items: Option<Json<Value>>,
}

impl From<IndustryRow> for Industry {
    fn from(row: IndustryRow) -> Self {
        // Malformed approach items are dropped rather than failing the page.
        let approach_items = row
            .approach_items
            .and_then(|Json(value)| serde_json::from_value::<Vec<ApproachItem>>(value).ok())
            .unwrap_or_default();

        Industry {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            image: row.image,
            bullet_points: raw_list(row.bullet_points),
            is_active: row.is_active,
            order_index: row.order_index,
            hero_title: row.hero_title,
            hero_description: row.hero_description,
            hero_industry_label: row.hero_industry_label,
            approach_items,
        }
    }
}

/// PostgreSQL repository for the `industries` table.
pub struct PgIndustryRepository {
    pool: Arc<PgPool>,
}

impl PgIndustryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Inserts or updates an industry keyed by slug.
    ///
    /// Used by the admin CLI to seed the store from the local catalog.
    /// Returns `true` when a new row was inserted.
    pub async fn upsert(&self, industry: &Industry) -> Result<bool, AppError> {
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO industries (
                name, slug, description, image, bullet_points, is_active, order_index,
                hero_title, hero_description, hero_industry_label, approach_items
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (slug) DO UPDATE SET
                name                = EXCLUDED.name,
                description         = EXCLUDED.description,
                image               = EXCLUDED.image,
                bullet_points       = EXCLUDED.bullet_points,
                is_active           = EXCLUDED.is_active,
                order_index         = EXCLUDED.order_index,
                hero_title          = EXCLUDED.hero_title,
                hero_description    = EXCLUDED.hero_description,
                hero_industry_label = EXCLUDED.hero_industry_label,
                approach_items      = EXCLUDED.approach_items,
                updated_at          = NOW()
            RETURNING (xmax = 0)
            "#,
        )
        .bind(&industry.name)
        .bind(&industry.slug)
        .bind(&industry.description)
        .bind(&industry.image)
        .bind(industry.bullet_points.as_ref().map(Json))
        .bind(industry.is_active)
        .bind(industry.order_index)
        .bind(&industry.hero_title)
        .bind(&industry.hero_description)
        .bind(&industry.hero_industry_label)
        .bind(Json(&industry.approach_items))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(inserted)
    }
}

#[async_trait]
impl IndustryRepository for PgIndustryRepository {
    async fn list_active(&self) -> Result<Vec<Industry>, AppError> {
        let rows = sqlx::query_as::<_, IndustryRow>(
            r#"
            SELECT id, name, slug, description, image, bullet_points, is_active, order_index,
                   hero_title, hero_description, hero_industry_label, approach_items
            FROM industries
            WHERE is_active = TRUE
            ORDER BY order_index ASC, id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Industry::from).collect())
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Industry>, AppError> {
        let row = sqlx::query_as::<_, IndustryRow>(
            r#"
            SELECT id, name, slug, description, image, bullet_points, is_active, order_index,
                   hero_title, hero_description, hero_industry_label, approach_items
            FROM industries
            WHERE slug = $1 AND is_active = TRUE
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Industry::from))
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM industries WHERE is_active = TRUE")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
