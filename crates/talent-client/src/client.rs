//! HTTP transport shared by every API area.

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use talent_core::config::ApiConfig;
use talent_core::result::AppResult;
use talent_storage::TokenStore;

use crate::error::{Operation, error_from_response};

/// Client for the job-board REST API.
///
/// Holds a handle on the session's [`TokenStore`] and reads the access token
/// fresh for every request, so a token saved by login or refresh applies to
/// the next call without rebuilding the client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    origin: String,
    tokens: TokenStore,
}

impl ApiClient {
    /// Build a client for the configured origin.
    pub fn new(config: &ApiConfig, tokens: TokenStore) -> AppResult<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("talent-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            origin: config.origin().to_string(),
            tokens,
        })
    }

    /// The API origin without a trailing slash.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The session token store this client authenticates with.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// Start a request with the bearer token attached when one is stored.
    fn builder(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        debug!(method = %method, path, "API request");
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.tokens.access_token()? {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(req)
    }

    fn json_builder(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        Ok(self
            .builder(method, path)?
            .header(CONTENT_TYPE, "application/json"))
    }

    /// Send and turn any non-success status into a normalized error.
    async fn execute(&self, req: RequestBuilder, operation: Operation) -> AppResult<Response> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.bytes().await.unwrap_or_default();
        let err = error_from_response(operation, status.as_u16(), &body);
        warn!(status = status.as_u16(), path = %path, message = %err.message, "API call failed");
        Err(err)
    }

    async fn execute_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> AppResult<T> {
        let response = self.execute(req, Operation::Request).await?;
        Ok(response.json::<T>().await?)
    }

    /// `GET` a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let req = self.json_builder(Method::GET, path)?;
        self.execute_json(req).await
    }

    /// `GET` a JSON resource with one extra request header.
    pub async fn get_with_header<T: DeserializeOwned>(
        &self,
        path: &str,
        header: Option<(&'static str, String)>,
    ) -> AppResult<T> {
        let mut req = self.json_builder(Method::GET, path)?;
        if let Some((name, value)) = header {
            req = req.header(name, value);
        }
        self.execute_json(req).await
    }

    /// `POST` a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.json_builder(Method::POST, path)?.json(body);
        self.execute_json(req).await
    }

    /// `POST` with no body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let req = self.json_builder(Method::POST, path)?;
        self.execute_json(req).await
    }

    /// `PATCH` a JSON body.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.json_builder(Method::PATCH, path)?.json(body);
        self.execute_json(req).await
    }

    /// `DELETE` a resource.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let req = self.json_builder(Method::DELETE, path)?;
        self.execute_json(req).await
    }

    /// `POST` a multipart form. The multipart boundary header is set by
    /// reqwest, so no JSON content type is attached.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> AppResult<T> {
        let req = self.builder(Method::POST, path)?.multipart(form);
        let response = self.execute(req, Operation::Upload).await?;
        Ok(response.json::<T>().await?)
    }

    /// `GET` an opaque binary payload.
    pub async fn download(&self, path: &str) -> AppResult<Bytes> {
        let req = self.builder(Method::GET, path)?;
        let response = self.execute(req, Operation::Download).await?;
        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};
    use talent_storage::MemoryStore;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
        let store = Arc::new(MemoryStore::new());
        let tokens = TokenStore::new(store);
        if let Some(t) = token {
            tokens
                .save(&talent_entity::user::TokenPair {
                    access_token: t.to_string(),
                    refresh_token: "refresh".to_string(),
                    token_type: "bearer".to_string(),
                })
                .unwrap();
        }
        let config = ApiConfig {
            base_url: format!("{}/", server.uri()),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, tokens).unwrap()
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("tok-1"));
        let body: Value = client.get("/ping").await.unwrap();
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let _: Value = client.get("/ping").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_detail_message_surfaces() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/job/create"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "X"})))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let err = client
            .post::<_, Value>("/job/create", &json!({"title": "t"}))
            .await
            .unwrap_err();
        assert_eq!(err.message, "X");
        assert_eq!(err.status, Some(403));
    }

    #[tokio::test]
    async fn test_non_json_error_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let err = client.get::<Value>("/users/me").await.unwrap_err();
        assert_eq!(err.message, "Request failed (500)");
    }

    #[tokio::test]
    async fn test_download_returns_raw_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file/blob"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x25, 0x50, 0x44, 0x46]))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let bytes = client.download("/file/blob").await.unwrap();
        assert_eq!(&bytes[..], b"%PDF");
    }

    #[tokio::test]
    async fn test_download_failure_label() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file/blob"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let err = client.download("/file/blob").await.unwrap_err();
        assert_eq!(err.message, "Download failed (404)");
    }
}
