//! Recruiter/admin analytics.

use talent_core::result::AppResult;
use talent_entity::analytics::Analytics;

use crate::client::ApiClient;

/// Number of skills requested when the caller has no preference.
pub const DEFAULT_TOP_SKILLS: u32 = 10;

impl ApiClient {
    pub async fn analytics(&self, top_skills: u32) -> AppResult<Analytics> {
        self.get(&format!("/analytics?top_skills={top_skills}"))
            .await
    }
}
