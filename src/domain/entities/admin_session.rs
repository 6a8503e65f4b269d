//! Admin session value.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An authenticated admin session.
///
/// The session lives entirely in its signed `token`; nothing is stored
/// server-side. It is valid until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
