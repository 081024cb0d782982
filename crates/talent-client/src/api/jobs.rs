//! Job postings, matching, and search.

use talent_core::result::AppResult;
use talent_core::types::{JobId, Page, QueryString};
use talent_entity::MessageResponse;
use talent_entity::job::{
    Job, JobCreate, JobMatchRequest, JobMatchResponse, JobQuery, JobUpdate, SearchJobItem,
};

use crate::client::ApiClient;

fn job_query(query: &JobQuery) -> QueryString {
    QueryString::new()
        .opt("page", query.page)
        .opt("size", query.size)
        .text("skill", query.skill.as_deref())
        .text("location", query.location.as_deref())
        .text("q", query.q.as_deref())
}

impl ApiClient {
    /// Listing visible to the caller's role.
    pub async fn list_jobs(&self, query: &JobQuery) -> AppResult<Page<Job>> {
        self.get(&format!("/job/list{}", job_query(query).to_suffix()))
            .await
    }

    /// Listing that needs no authentication.
    pub async fn list_public_jobs(&self, query: &JobQuery) -> AppResult<Page<Job>> {
        self.get(&format!("/job/public-list{}", job_query(query).to_suffix()))
            .await
    }

    pub async fn create_job(&self, job: &JobCreate) -> AppResult<Job> {
        self.post("/job/create", job).await
    }

    pub async fn update_job(&self, job_id: JobId, update: &JobUpdate) -> AppResult<Job> {
        self.patch(&format!("/job/{job_id}"), update).await
    }

    pub async fn delete_job(&self, job_id: JobId) -> AppResult<MessageResponse> {
        self.delete(&format!("/job/{job_id}")).await
    }

    /// Rank postings against a resume.
    pub async fn match_jobs(&self, request: &JobMatchRequest) -> AppResult<JobMatchResponse> {
        self.post("/job/match", request).await
    }

    /// Keyword or semantic search. All four parameters are always sent.
    pub async fn search_jobs(
        &self,
        q: &str,
        page: u32,
        size: u32,
        semantic: bool,
    ) -> AppResult<Page<SearchJobItem>> {
        let qs = QueryString::new()
            .push("q", q)
            .push("page", page)
            .push("size", size)
            .push("semantic", semantic);
        self.get(&format!("/search/jobs{}", qs.to_suffix())).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use talent_core::config::ApiConfig;
    use talent_storage::{MemoryStore, TokenStore};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> ApiClient {
        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, TokenStore::new(Arc::new(MemoryStore::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_list_without_filters_has_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/job/list"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"page": 1, "size": 10, "total": 0, "items": []})),
            )
            .mount(&server)
            .await;

        let page = client(&server).list_jobs(&JobQuery::default()).await.unwrap();
        assert!(page.items.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_search_sends_all_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/jobs"))
            .and(query_param("q", "rust"))
            .and(query_param("page", "1"))
            .and(query_param("size", "10"))
            .and(query_param("semantic", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": "rust",
                "semantic": false,
                "page": 1,
                "size": 10,
                "total": 1,
                "items": [{
                    "id": "6a1c6f4e-5d1f-4f57-9a37-6c1f1b1f0002",
                    "title": "Rust engineer",
                    "location": "Remote",
                    "skills": ["rust"]
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client(&server).search_jobs("rust", 1, 10, false).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Rust engineer");
    }
}
