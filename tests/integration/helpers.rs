//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use talent_auth::SessionService;
use talent_client::ApiClient;
use talent_core::config::ApiConfig;
use talent_entity::user::TokenPair;
use talent_storage::{MemoryStore, TokenStore};

pub const USER_ID: &str = "0b6f7c3e-2f35-4c59-9c4e-1b0f6a3d5e01";
pub const OTHER_ID: &str = "0b6f7c3e-2f35-4c59-9c4e-1b0f6a3d5e02";
pub const ROOM_ID: &str = "5d0c1a2b-7e8f-4a1b-9c2d-3e4f5a6b7c01";

/// Mock backend plus a client wired to an in-memory session store
pub struct TestApp {
    /// The mock job-board API
    pub server: MockServer,
    /// Client pointed at the mock server
    pub client: ApiClient,
    /// Token store shared with the client
    pub tokens: TokenStore,
}

impl TestApp {
    /// Create a new test application with an empty session
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let tokens = TokenStore::new(Arc::new(MemoryStore::new()));
        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, tokens.clone()).expect("client config is valid");

        Self {
            server,
            client,
            tokens,
        }
    }

    /// Create a test application whose store already holds a token pair
    pub async fn with_tokens(access: &str, refresh: &str) -> Self {
        let app = Self::new().await;
        app.tokens
            .save(&token_pair(access, refresh))
            .expect("memory store never fails");
        app
    }

    /// Session service over this app's client and store
    pub fn session(&self) -> SessionService<ApiClient> {
        SessionService::new(Arc::new(self.client.clone()), self.tokens.clone())
    }

    /// Number of requests the mock server saw for `path`
    pub async fn hits(&self, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == route)
            .count()
    }

    /// Mount `GET /users/me` answering `status` with `body`
    pub async fn mount_me(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

pub fn token_pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        token_type: "bearer".to_string(),
    }
}

pub fn token_json(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

pub fn user_json(role: &str) -> Value {
    json!({
        "id": USER_ID,
        "username": "ada",
        "name": "Ada Lovelace",
        "sex": "female",
        "age": 36,
        "email": "ada@example.com",
        "role": role,
        "is_active": true,
        "is_verified": true
    })
}

pub fn message_json(id: &str, sender: &str, content: &str) -> Value {
    json!({
        "id": id,
        "application_id": ROOM_ID,
        "sender_id": sender,
        "sender_name": "Ada Lovelace",
        "content": content,
        "created_at": "2026-02-22T10:00:00.123456"
    })
}
