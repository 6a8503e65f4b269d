//! Handler for testimonials.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::content::{ListResponse, TestimonialQuery};
use crate::application::views::TestimonialView;
use crate::state::AppState;

/// Lists testimonials, newest first.
///
/// # Endpoint
///
/// `GET /api/testimonials`
///
/// # Query Parameters
///
/// - `featured` (optional): `true` to return featured testimonials only
///
/// Testimonials without a usable photo get a rotating placeholder avatar.
pub async fn testimonial_list_handler(
    State(state): State<AppState>,
    Query(params): Query<TestimonialQuery>,
) -> Json<ListResponse<TestimonialView>> {
    let featured_only = params.featured.unwrap_or(false);

    Json(
        state
            .testimonial_service
            .list_testimonials(featured_only)
            .await
            .into(),
    )
}
