//! Handlers for the admin panel API.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::admin::{AdminLoginRequest, AdminSessionResponse};
use crate::application::services::DashboardCounters;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges the admin password for a session token.
///
/// # Endpoint
///
/// `POST /api/admin/session`
///
/// # Response
///
/// ```json
/// {
///   "token": "1760000000.4f1c...",
///   "expires_at": "2025-10-09T10:13:20Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized if the password is wrong or the admin panel is
/// disabled.
pub async fn admin_login_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdminLoginRequest>, JsonRejection>,
) -> Result<Json<AdminSessionResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let session = state.session_service.login(&payload.password)?;
    tracing::info!(expires_at = %session.expires_at, "Admin session issued");

    Ok(Json(session.into()))
}

/// Dashboard record counters.
///
/// # Endpoint
///
/// `GET /api/admin/stats` (requires a session token)
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store cannot be queried.
pub async fn admin_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<DashboardCounters>, AppError> {
    Ok(Json(state.dashboard_service.counters().await?))
}
