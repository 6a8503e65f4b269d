//! DTOs for the admin endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::AdminSession;

/// Admin login request.
#[derive(Debug, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, max = 256, message = "Password is required"))]
    pub password: String,
}

/// Issued admin session. The token goes into `Authorization: Bearer`.
#[derive(Debug, Serialize)]
pub struct AdminSessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<AdminSession> for AdminSessionResponse {
    fn from(session: AdminSession) -> Self {
        Self {
            token: session.token,
            expires_at: session.expires_at,
        }
    }
}
