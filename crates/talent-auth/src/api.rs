//! Authentication endpoints as a trait, so the session logic can run against
//! a fake in tests.

use async_trait::async_trait;

use talent_client::ApiClient;
use talent_core::result::AppResult;
use talent_entity::user::{CurrentUser, SignupRequest, TokenPair};

/// The four calls the session lifecycle needs.
#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    /// Fetch the user identified by the stored access token.
    async fn me(&self) -> AppResult<CurrentUser>;

    /// Exchange a refresh token for a new pair.
    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair>;

    /// Exchange credentials for a pair.
    async fn login(&self, identifier: &str, password: &str) -> AppResult<TokenPair>;

    /// Register and receive a pair.
    async fn signup(&self, request: &SignupRequest) -> AppResult<TokenPair>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn me(&self) -> AppResult<CurrentUser> {
        ApiClient::me(self).await
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        ApiClient::refresh(self, refresh_token).await
    }

    async fn login(&self, identifier: &str, password: &str) -> AppResult<TokenPair> {
        ApiClient::login(self, identifier, password).await
    }

    async fn signup(&self, request: &SignupRequest) -> AppResult<TokenPair> {
        ApiClient::signup(self, request).await
    }
}
