//! Admin session issuing and validation.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::domain::entities::AdminSession;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Owns the admin login flow.
///
/// A successful login yields an [`AdminSession`] whose token has the form
/// `<expires_unix>.<hex HMAC-SHA256>`. Validation recomputes the MAC with the
/// server secret and checks the expiry; there is no server-side session
/// store, so a token stays valid until it expires.
///
/// Password comparison goes through the same MAC so it runs in constant time.
pub struct SessionService {
    admin_password: Option<String>,
    signing_secret: String,
    ttl: Duration,
}

impl SessionService {
    /// Creates the service.
    ///
    /// `admin_password` of `None` (or empty) disables login entirely.
    pub fn new(admin_password: Option<String>, signing_secret: String, ttl: Duration) -> Self {
        Self {
            admin_password: admin_password.filter(|p| !p.is_empty()),
            signing_secret,
            ttl,
        }
    }

    /// Exchanges the admin password for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when login is disabled or the
    /// password does not match.
    pub fn login(&self, password: &str) -> Result<AdminSession, AppError> {
        self.login_at(password, Utc::now())
    }

    pub fn login_at(&self, password: &str, now: DateTime<Utc>) -> Result<AdminSession, AppError> {
        let Some(expected) = self.admin_password.as_deref() else {
            return Err(AppError::unauthorized(
                "Admin login is disabled",
                json!({"hint": "Set ADMIN_PASSWORD to enable the admin panel"}),
            ));
        };

        let expected_mac = self.sign(&format!("password:{expected}"))?;
        let mut mac = self.mac()?;
        mac.update(format!("password:{password}").as_bytes());

        if mac.verify_slice(&expected_mac).is_err() {
            tracing::warn!("Rejected admin login attempt");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid password"}),
            ));
        }

        self.issue(now + self.ttl)
    }

    /// Checks a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, forged or expired
    /// tokens.
    pub fn validate(&self, token: &str) -> Result<AdminSession, AppError> {
        self.validate_at(token, Utc::now())
    }

    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<AdminSession, AppError> {
        let invalid = || {
            AppError::unauthorized("Unauthorized", json!({"reason": "Invalid session token"}))
        };

        let (timestamp, signature) = token.split_once('.').ok_or_else(invalid)?;
        let timestamp: i64 = timestamp.parse().map_err(|_| invalid())?;
        let signature = hex::decode(signature).map_err(|_| invalid())?;

        let mut mac = self.mac()?;
        mac.update(format!("session:{timestamp}").as_bytes());
        mac.verify_slice(&signature).map_err(|_| invalid())?;

        let expires_at = DateTime::from_timestamp(timestamp, 0).ok_or_else(invalid)?;
        let session = AdminSession {
            token: token.to_string(),
            expires_at,
        };

        if session.is_expired_at(now) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Session expired"}),
            ));
        }

        Ok(session)
    }

    fn issue(&self, expires_at: DateTime<Utc>) -> Result<AdminSession, AppError> {
        let timestamp = expires_at.timestamp();
        let signature = hex::encode(self.sign(&format!("session:{timestamp}"))?);

        Ok(AdminSession {
            token: format!("{timestamp}.{signature}"),
            expires_at: DateTime::from_timestamp(timestamp, 0).unwrap_or(expires_at),
        })
    }

    fn mac(&self) -> Result<HmacSha256, AppError> {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .map_err(|_| AppError::internal("Invalid session signing key", json!({})))
    }

    fn sign(&self, payload: &str) -> Result<Vec<u8>, AppError> {
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new(
            Some("open-sesame".to_string()),
            "test-signing-secret".to_string(),
            Duration::hours(2),
        )
    }

    #[test]
    fn test_login_issues_two_hour_session() {
        let now = Utc::now();
        let session = service().login_at("open-sesame", now).unwrap();

        let lifetime = session.expires_at - now;
        assert!(lifetime <= Duration::hours(2));
        assert!(lifetime > Duration::hours(2) - Duration::seconds(2));
    }

    #[test]
    fn test_login_wrong_password() {
        let result = service().login("sesame");
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_login_disabled_without_password() {
        let svc = SessionService::new(Some(String::new()), "s".to_string(), Duration::hours(2));
        assert!(matches!(
            svc.login("").unwrap_err(),
            AppError::Unauthorized { .. }
        ));
    }

    #[test]
    fn test_validate_round_trip() {
        let svc = service();
        let session = svc.login("open-sesame").unwrap();

        let validated = svc.validate(&session.token).unwrap();
        assert_eq!(validated, session);
    }

    #[test]
    fn test_validate_expired() {
        let svc = service();
        let now = Utc::now();
        let session = svc.login_at("open-sesame", now).unwrap();

        assert!(svc.validate_at(&session.token, now + Duration::minutes(119)).is_ok());
        assert!(
            svc.validate_at(&session.token, now + Duration::hours(2) + Duration::seconds(1))
                .is_err()
        );
    }

    #[test]
    fn test_validate_rejects_tampering() {
        let svc = service();
        let session = svc.login("open-sesame").unwrap();
        let (timestamp, signature) = session.token.split_once('.').unwrap();

        let extended = format!("{}.{}", timestamp.parse::<i64>().unwrap() + 3600, signature);
        assert!(svc.validate(&extended).is_err());
        assert!(svc.validate("garbage").is_err());
        assert!(svc.validate("123.zz").is_err());
    }

    #[test]
    fn test_validate_rejects_other_secret() {
        let session = service().login("open-sesame").unwrap();
        let other = SessionService::new(
            Some("open-sesame".to_string()),
            "other-secret".to_string(),
            Duration::hours(2),
        );

        assert!(other.validate(&session.token).is_err());
    }
}
