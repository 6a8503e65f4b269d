//! DTOs shared by the content read endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// A list of items.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Query parameters for `GET /api/testimonials`.
///
/// Uses `serde_with` to parse `featured` from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TestimonialQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub featured: Option<bool>,
}
