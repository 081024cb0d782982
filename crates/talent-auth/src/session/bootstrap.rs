//! Startup session check with a single refresh-then-retry.

use std::sync::Arc;

use tracing::{info, warn};

use talent_core::result::AppResult;
use talent_entity::user::CurrentUser;
use talent_storage::TokenStore;

use crate::api::AuthApi;

use super::state::BootstrapState;

/// Resolves whether the stored session is still usable.
///
/// Runs at most three network calls: fetch user, refresh, fetch user again.
/// Network failures never escape; they end in [`BootstrapState::Anonymous`]
/// with the tokens cleared. Only local storage errors are returned.
#[derive(Debug)]
pub struct SessionBootstrap<A> {
    api: Arc<A>,
    tokens: TokenStore,
}

impl<A: AuthApi> SessionBootstrap<A> {
    pub fn new(api: Arc<A>, tokens: TokenStore) -> Self {
        Self { api, tokens }
    }

    /// Run to a terminal state.
    pub async fn run(&self) -> AppResult<BootstrapState> {
        if !self.tokens.has_access_token()? {
            info!("No stored session");
            return Ok(BootstrapState::Anonymous);
        }

        match self.api.me().await {
            Ok(user) => Ok(self.authenticated(user)),
            Err(err) => {
                warn!(error = %err, "Stored access token rejected, attempting refresh");
                self.refresh_and_retry().await
            }
        }
    }

    async fn refresh_and_retry(&self) -> AppResult<BootstrapState> {
        let Some(refresh_token) = self.tokens.refresh_token()? else {
            info!("No refresh token stored");
            return self.give_up();
        };

        let pair = match self.api.refresh(&refresh_token).await {
            Ok(pair) => pair,
            Err(err) => {
                warn!(error = %err, "Token refresh rejected");
                return self.give_up();
            }
        };
        self.tokens.save(&pair)?;

        match self.api.me().await {
            Ok(user) => Ok(self.authenticated(user)),
            Err(err) => {
                warn!(error = %err, "User fetch failed after refresh");
                self.give_up()
            }
        }
    }

    fn authenticated(&self, user: CurrentUser) -> BootstrapState {
        info!(user_id = %user.id, role = %user.role, "Session restored");
        BootstrapState::Authenticated(user)
    }

    fn give_up(&self) -> AppResult<BootstrapState> {
        self.tokens.clear()?;
        info!("Session cleared");
        Ok(BootstrapState::Anonymous)
    }
}
