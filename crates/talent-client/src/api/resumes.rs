//! Resume upload, parsing, and feedback.

use reqwest::multipart::Form;

use talent_core::result::AppResult;
use talent_core::types::ResumeId;
use talent_entity::resume::{
    FeedbackRequest, FeedbackTask, ResumeFeedback, ResumeParseResult, ResumeUpload, TaskStatus,
};

use crate::client::ApiClient;
use crate::upload::UploadFile;

impl ApiClient {
    /// Upload a resume document as the `file` part.
    pub async fn upload_resume(&self, file: UploadFile) -> AppResult<ResumeUpload> {
        let form = Form::new().part("file", file.into_part()?);
        self.upload("/resume/upload", form).await
    }

    /// The caller's most recent upload.
    pub async fn latest_resume(&self) -> AppResult<ResumeUpload> {
        self.get("/resume/latest").await
    }

    pub async fn parsed_resume(&self, resume_id: ResumeId) -> AppResult<ResumeParseResult> {
        self.get(&format!("/resume/{resume_id}/parsed")).await
    }

    /// Generate feedback synchronously.
    pub async fn resume_feedback(&self, resume_id: ResumeId) -> AppResult<ResumeFeedback> {
        self.post("/resume/feedback", &FeedbackRequest { resume_id })
            .await
    }

    /// Queue feedback generation; poll with [`ApiClient::task_status`].
    pub async fn resume_feedback_async(&self, resume_id: ResumeId) -> AppResult<FeedbackTask> {
        self.post("/resume/feedback/async", &FeedbackRequest { resume_id })
            .await
    }

    pub async fn task_status(&self, task_id: &str) -> AppResult<TaskStatus> {
        self.get(&format!("/tasks/{task_id}/status")).await
    }
}
