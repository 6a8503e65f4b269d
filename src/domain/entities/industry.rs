//! Industry entity: a sector the company recruits for.

use serde::{Deserialize, Serialize};

use super::bullet_points::RawBulletPoints;

/// One step of the "our approach" section on an industry page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachItem {
    pub title: String,
    pub description: String,
}

impl ApproachItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// An industry record as stored, before assembly.
///
/// Optional hero fields override values derived from `name` and
/// `description` when present.
#[derive(Debug, Clone)]
pub struct Industry {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<String>,
    pub bullet_points: Option<RawBulletPoints>,
    pub is_active: bool,
    pub order_index: i32,
    pub hero_title: Option<String>,
    pub hero_description: Option<String>,
    pub hero_industry_label: Option<String>,
    pub approach_items: Vec<ApproachItem>,
}
