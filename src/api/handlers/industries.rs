//! Handlers for industry content.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::content::ListResponse;
use crate::application::views::IndustryView;
use crate::domain::entities::is_addressable_slug;
use crate::error::AppError;
use crate::state::AppState;

/// Lists visible industries in display order.
///
/// # Endpoint
///
/// `GET /api/industries`
///
/// # Response
///
/// `{"items": [...]}`. When the store is unreachable the items come from the
/// built-in catalog (each item carries `"source": "catalog"`); when the store
/// has no active industries the list is empty.
pub async fn industry_list_handler(
    State(state): State<AppState>,
) -> Json<ListResponse<IndustryView>> {
    Json(state.industry_service.list_industries().await.into())
}

/// Lists slugs of visible industries.
///
/// # Endpoint
///
/// `GET /api/industries/slugs`
pub async fn industry_slugs_handler(State(state): State<AppState>) -> Json<ListResponse<String>> {
    Json(state.industry_service.all_industry_slugs().await.into())
}

/// Returns one industry by slug.
///
/// # Endpoint
///
/// `GET /api/industries/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is not addressable, inactive or unknown.
pub async fn industry_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<IndustryView>, AppError> {
    let not_found = || AppError::not_found("Industry not found", json!({"slug": slug}));

    if !is_addressable_slug(&slug) {
        return Err(not_found());
    }

    state
        .industry_service
        .get_industry(&slug)
        .await
        .map(Json)
        .ok_or_else(not_found)
}
