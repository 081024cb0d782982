//! Job applications.

use talent_core::result::AppResult;
use talent_core::types::{ApplicationId, QueryString};
use talent_entity::application::{
    Application, ApplicationCreate, ApplicationQuery, ApplicationStatus, StatusUpdate,
};

use crate::client::ApiClient;

impl ApiClient {
    pub async fn create_application(&self, request: &ApplicationCreate) -> AppResult<Application> {
        self.post("/application/create", request).await
    }

    /// Applications visible to the caller, optionally filtered.
    pub async fn list_applications(&self, query: &ApplicationQuery) -> AppResult<Vec<Application>> {
        let qs = QueryString::new()
            .opt("status", query.status)
            .opt("job_id", query.job_id)
            .opt("user_id", query.user_id);
        self.get(&format!("/application/list{}", qs.to_suffix()))
            .await
    }

    /// Move an application to another pipeline stage.
    pub async fn update_application_status(
        &self,
        application_id: ApplicationId,
        status: ApplicationStatus,
    ) -> AppResult<Application> {
        self.patch(
            &format!("/application/{application_id}/status"),
            &StatusUpdate { status },
        )
        .await
    }
}
