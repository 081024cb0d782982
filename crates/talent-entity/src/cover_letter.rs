//! Cover letter models.

use serde::{Deserialize, Serialize};

use talent_core::types::{CoverLetterId, ResumeId, Timestamp, UserId};

/// A generated or uploaded cover letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetter {
    pub id: CoverLetterId,
    pub user_id: UserId,
    pub resume_id: ResumeId,
    pub job_description: String,
    pub generated_text: String,
    pub generator_source: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /cover-letter/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterGenerate {
    pub resume_id: ResumeId,
    pub job_description: String,
}
