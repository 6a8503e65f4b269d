//! Offering entity: a service the company sells (the `services` table).

use super::bullet_points::RawBulletPoints;

/// A service record as stored, before assembly.
#[derive(Debug, Clone)]
pub struct Offering {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub hero_image: Option<String>,
    pub hero_title: Option<String>,
    pub hero_description: Option<String>,
    pub hero_bulletpoints: Option<RawBulletPoints>,
    pub is_active: bool,
    pub order_index: i32,
}
