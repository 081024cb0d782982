//! Recruiter/admin analytics models.

use serde::{Deserialize, Serialize};

use talent_core::types::JobId;

/// Application count for one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationCount {
    pub job_id: JobId,
    pub title: String,
    pub application_count: u64,
}

/// Occurrence count of a skill across postings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

/// Response of `GET /analytics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub applications_per_job: Vec<JobApplicationCount>,
    pub popular_skills: Vec<SkillCount>,
}
