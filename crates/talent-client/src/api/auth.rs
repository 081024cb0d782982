//! Authentication endpoints.

use tracing::info;

use talent_core::result::AppResult;
use talent_entity::user::{Credentials, CurrentUser, RefreshRequest, SignupRequest, TokenPair};

use crate::client::ApiClient;

impl ApiClient {
    /// Register a new account. Admin accounts cannot self-register.
    pub async fn signup(&self, request: &SignupRequest) -> AppResult<TokenPair> {
        let tokens = self.post("/auth/signup", request).await?;
        info!(username = %request.username, "Signed up");
        Ok(tokens)
    }

    /// Exchange credentials for a token pair.
    ///
    /// The identifier is trimmed and sent as `email` when it contains `@`,
    /// otherwise as `username`.
    pub async fn login(&self, identifier: &str, password: &str) -> AppResult<TokenPair> {
        let credentials = Credentials::from_identifier(identifier, password);
        self.post("/auth/login", &credentials).await
    }

    /// Exchange a refresh token for a new pair.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.post("/auth/refresh", &body).await
    }

    /// Fetch the authenticated user.
    pub async fn me(&self) -> AppResult<CurrentUser> {
        self.get("/users/me").await
    }
}
