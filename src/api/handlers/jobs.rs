//! Handlers for open positions.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::content::ListResponse;
use crate::application::views::JobView;
use crate::domain::entities::is_addressable_slug;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/jobs`
pub async fn job_list_handler(State(state): State<AppState>) -> Json<ListResponse<JobView>> {
    Json(state.job_service.list_jobs().await.into())
}

/// `GET /api/jobs/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is not addressable, inactive or unknown.
pub async fn job_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<JobView>, AppError> {
    let not_found = || AppError::not_found("Job not found", json!({"slug": slug}));

    if !is_addressable_slug(&slug) {
        return Err(not_found());
    }

    state
        .job_service
        .get_job(&slug)
        .await
        .map(Json)
        .ok_or_else(not_found)
}
