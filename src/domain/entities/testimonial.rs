//! Testimonial entity.

use chrono::{DateTime, Utc};

/// A client quote shown in the testimonial scroller.
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: i64,
    pub text: String,
    pub image: Option<String>,
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}
