//! Job posting models.

use serde::{Deserialize, Serialize};

use talent_core::types::{JobId, ResumeId, Timestamp, UserId};

/// A job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub recruiter_id: UserId,
    #[serde(default)]
    pub recruiter_name: Option<String>,
    #[serde(default)]
    pub recruiter_username: Option<String>,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub location: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /job/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub location: String,
}

/// Body of `PATCH /job/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl JobUpdate {
    /// Whether the update would send an empty body.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.skills.is_none()
            && self.location.is_none()
    }
}

/// Filters shared by the authenticated and public job listings.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub skill: Option<String>,
    pub location: Option<String>,
    pub q: Option<String>,
}

/// Hit from `GET /search/jobs`; a reduced view of [`Job`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchJobItem {
    pub id: JobId,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Body of `POST /job/match`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchRequest {
    pub resume_id: ResumeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

/// A single ranked match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: JobId,
    pub title: String,
    pub location: String,
    pub skills: Vec<String>,
    pub similarity_score: f64,
    pub rank: u32,
}

/// Ranked jobs for a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchResponse {
    pub resume_id: ResumeId,
    pub model_name: String,
    pub generated_at: Timestamp,
    pub matches: Vec<JobMatch>,
}
