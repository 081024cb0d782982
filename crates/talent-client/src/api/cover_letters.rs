//! Cover letter generation and upload.

use reqwest::multipart::Form;

use talent_core::result::AppResult;
use talent_core::types::{CoverLetterId, ResumeId};
use talent_entity::cover_letter::{CoverLetter, CoverLetterGenerate};

use crate::client::ApiClient;
use crate::upload::UploadFile;

impl ApiClient {
    pub async fn generate_cover_letter(
        &self,
        request: &CoverLetterGenerate,
    ) -> AppResult<CoverLetter> {
        self.post("/cover-letter/generate", request).await
    }

    /// Upload an existing letter. An absent job description is sent empty.
    pub async fn upload_cover_letter(
        &self,
        resume_id: ResumeId,
        job_description: Option<&str>,
        file: UploadFile,
    ) -> AppResult<CoverLetter> {
        let form = Form::new()
            .text("resume_id", resume_id.to_string())
            .text("job_description", job_description.unwrap_or_default().to_string())
            .part("file", file.into_part()?);
        self.upload("/cover-letter/upload", form).await
    }

    pub async fn cover_letter(&self, cover_letter_id: CoverLetterId) -> AppResult<CoverLetter> {
        self.get(&format!("/cover-letter/{cover_letter_id}")).await
    }
}
