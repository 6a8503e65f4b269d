//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who filled in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    HiringManager,
    JobSeeker,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::HiringManager => "hiring-manager",
            UserType::JobSeeker => "job-seeker",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hiring-manager" => Some(UserType::HiringManager),
            "job-seeker" => Some(UserType::JobSeeker),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific part of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactDetails {
    HiringManager {
        organization: Option<String>,
        hiring_positions: Option<String>,
    },
    JobSeeker {
        roles: Option<String>,
        nationality: Option<String>,
    },
}

impl ContactDetails {
    pub fn user_type(&self) -> UserType {
        match self {
            ContactDetails::HiringManager { .. } => UserType::HiringManager,
            ContactDetails::JobSeeker { .. } => UserType::JobSeeker,
        }
    }
}

/// Input data for recording a new submission.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub details: ContactDetails,
}

/// A stored submission.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub details: ContactDetails,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_strings() {
        assert_eq!(UserType::HiringManager.as_str(), "hiring-manager");
        assert_eq!(UserType::parse("job-seeker"), Some(UserType::JobSeeker));
        assert_eq!(UserType::parse("recruiter"), None);
        assert_eq!(
            serde_json::to_string(&UserType::HiringManager).unwrap(),
            "\"hiring-manager\""
        );
    }

    #[test]
    fn test_details_user_type() {
        let details = ContactDetails::JobSeeker {
            roles: Some("Nurse".to_string()),
            nationality: None,
        };
        assert_eq!(details.user_type(), UserType::JobSeeker);
    }
}
