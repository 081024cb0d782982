//! Binary document downloads.

use bytes::Bytes;

use talent_core::result::AppResult;
use talent_core::types::{CoverLetterId, ResumeId};

use crate::client::ApiClient;

impl ApiClient {
    pub async fn download_resume(&self, resume_id: ResumeId) -> AppResult<Bytes> {
        self.download(&format!("/file/resume/{resume_id}/download"))
            .await
    }

    pub async fn download_cover_letter(&self, cover_letter_id: CoverLetterId) -> AppResult<Bytes> {
        self.download(&format!("/file/cover-letter/{cover_letter_id}/download"))
            .await
    }
}
