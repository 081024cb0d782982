//! Resume upload, parsing, and AI feedback models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use talent_core::types::{FeedbackId, ParseResultId, ResumeId, Timestamp};

/// Metadata of an uploaded resume file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeUpload {
    pub id: ResumeId,
    pub original_filename: String,
    pub file_path: String,
    pub storage_backend: String,
    pub content_type: String,
    pub file_size: u64,
    pub processing_status: String,
    #[serde(default)]
    pub processing_task_id: Option<String>,
}

/// Structured data extracted from a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeParseResult {
    pub id: ParseResultId,
    pub resume_id: ResumeId,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    #[serde(default)]
    pub entities: Vec<Value>,
    pub parser_source: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResumeParseResult {
    /// Heuristic completeness score out of 100 shown next to parsed data.
    pub fn score(&self, has_feedback: bool) -> u32 {
        let mut score = 40;
        score += (self.skills.len() as u32 * 4).min(24);
        score += (self.experience.len() as u32 * 6).min(24);
        score += (self.education.len() as u32 * 4).min(12);
        if has_feedback {
            score += 8;
        }
        score.min(100)
    }
}

/// AI-generated feedback on a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeFeedback {
    pub id: FeedbackId,
    pub resume_id: ResumeId,
    pub skills_feedback: String,
    pub phrasing_feedback: String,
    pub formatting_feedback: String,
    pub overall_feedback: String,
    pub generator_source: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of the feedback endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub resume_id: ResumeId,
}

/// Handle of a queued feedback task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackTask {
    pub task_id: String,
    pub status: String,
}

/// Raw task status document; only its state field is interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(pub serde_json::Map<String, Value>);

/// Interpreted state of a background task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Finished successfully.
    Succeeded,
    /// Finished with an error.
    Failed,
    /// Anything else: queued, started, retrying, unknown.
    Pending,
}

impl TaskStatus {
    /// The state string, read from `status` and falling back to `state`,
    /// lower-cased. Missing or non-string values read as empty.
    pub fn state_str(&self) -> String {
        let pick = |key: &str| self.0.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());
        pick("status")
            .or_else(|| pick("state"))
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Interpret the state string.
    pub fn state(&self) -> TaskState {
        match self.state_str().as_str() {
            "success" => TaskState::Succeeded,
            "failure" | "failed" => TaskState::Failed,
            _ => TaskState::Pending,
        }
    }
}
