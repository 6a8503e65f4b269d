//! Handlers for the services offered.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::content::ListResponse;
use crate::application::views::OfferingView;
use crate::domain::entities::is_addressable_slug;
use crate::error::AppError;
use crate::state::AppState;

/// Lists visible services in display order.
///
/// # Endpoint
///
/// `GET /api/services`
pub async fn service_list_handler(
    State(state): State<AppState>,
) -> Json<ListResponse<OfferingView>> {
    Json(state.offering_service.list_offerings().await.into())
}

/// Lists slugs of visible services.
///
/// # Endpoint
///
/// `GET /api/services/slugs`
pub async fn service_slugs_handler(State(state): State<AppState>) -> Json<ListResponse<String>> {
    Json(state.offering_service.all_offering_slugs().await.into())
}

/// Returns one service by slug, with hero copy and bullet points filled in.
///
/// # Endpoint
///
/// `GET /api/services/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is not addressable, inactive or unknown.
pub async fn service_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<OfferingView>, AppError> {
    let not_found = || AppError::not_found("Service not found", json!({"slug": slug}));

    if !is_addressable_slug(&slug) {
        return Err(not_found());
    }

    state
        .offering_service
        .get_offering(&slug)
        .await
        .map(Json)
        .ok_or_else(not_found)
}
