//! Job entity: an open position on the careers page.

use chrono::{DateTime, Utc};

use super::bullet_points::RawBulletPoints;

#[derive(Debug, Clone)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: String,
    pub requirements: Option<RawBulletPoints>,
    pub is_active: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}
