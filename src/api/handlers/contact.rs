//! Handler for the contact form.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Records a contact form submission.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "message": "We are hiring",
///   "user_type": "hiring-manager",
///   "organization": "Analytical Engines Ltd",
///   "hiring_positions": "2 engineers"
/// }
/// ```
///
/// Job seekers send `roles` and `nationality` instead of the hiring
/// manager fields.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object, name or email
/// is missing, the email is malformed, or `user_type` is unknown. Nothing is
/// stored in that case.
pub async fn contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let submission = payload.into_submission()?;
    let stored = state.contact_service.submit(submission).await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}
