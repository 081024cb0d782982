//! Job application models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use talent_core::AppError;
use talent_core::types::{ApplicationId, CoverLetterId, JobId, ResumeId, Timestamp, UserId};

/// Pipeline stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted, not yet reviewed.
    Applied,
    /// Invited to interview.
    Interview,
    /// Declined.
    Rejected,
}

impl ApplicationStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applied" => Ok(Self::Applied),
            "interview" => Ok(Self::Interview),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::validation(format!(
                "Invalid application status: '{s}'. Expected one of: applied, interview, rejected"
            ))),
        }
    }
}

/// A job application. Its id doubles as the chat room id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    #[serde(default)]
    pub job_title: Option<String>,
    pub user_id: UserId,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_username: Option<String>,
    #[serde(default)]
    pub resume_id: Option<ResumeId>,
    #[serde(default)]
    pub cover_letter_id: Option<CoverLetterId>,
    pub status: ApplicationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /application/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreate {
    pub job_id: JobId,
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<ResumeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter_id: Option<CoverLetterId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

/// Filters for `GET /application/list`.
#[derive(Debug, Clone, Default)]
pub struct ApplicationQuery {
    pub status: Option<ApplicationStatus>,
    pub job_id: Option<JobId>,
    pub user_id: Option<UserId>,
}

/// Body of `PATCH /application/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_naive_timestamps() {
        let json = r#"{
            "id": "6a1c6f4e-5d1f-4f57-9a37-6c1f1b1f0001",
            "job_id": "6a1c6f4e-5d1f-4f57-9a37-6c1f1b1f0002",
            "user_id": "6a1c6f4e-5d1f-4f57-9a37-6c1f1b1f0003",
            "status": "interview",
            "created_at": "2026-02-22T09:00:00.5",
            "updated_at": "2026-02-22T09:30:00"
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.status, ApplicationStatus::Interview);
        assert!(app.resume_id.is_none());
    }

    #[test]
    fn test_create_omits_unset_fields() {
        let body = ApplicationCreate {
            job_id: JobId::new(),
            user_id: UserId::new(),
            resume_id: None,
            cover_letter_id: None,
            status: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("resume_id").is_none());
        assert!(json.get("status").is_none());
    }
}
