//! Presentation-ready content shapes.
//!
//! Every view carries a resolved, non-empty image path and fully populated
//! descriptive fields. Raw storage shapes never cross this boundary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ApproachItem;

/// Where an assembled record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// The remote content store.
    Remote,
    /// The compiled-in local catalog.
    Catalog,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryView {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub bullet_points: Vec<String>,
    pub order_index: i32,
    pub hero_title: String,
    pub hero_description: String,
    pub hero_industry_label: String,
    pub approach_items: Vec<ApproachItem>,
    pub source: ContentSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferingView {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub hero_image: String,
    pub hero_title: String,
    pub hero_description: String,
    pub hero_bulletpoints: Vec<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialView {
    pub id: i64,
    pub text: String,
    pub image: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}
