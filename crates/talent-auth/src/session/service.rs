//! Owned session context: bootstrap, login, signup, logout.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use talent_core::result::AppResult;
use talent_entity::user::{CurrentUser, SignupRequest, TokenPair};
use talent_storage::TokenStore;

use crate::api::AuthApi;

use super::bootstrap::SessionBootstrap;
use super::state::{BootstrapState, SessionSnapshot};

/// The single owner of session state for a running client.
///
/// Mutated only through [`bootstrap`](Self::bootstrap),
/// [`login`](Self::login), [`signup`](Self::signup) and
/// [`logout`](Self::logout). Readers subscribe to the watch channel.
#[derive(Debug)]
pub struct SessionService<A> {
    api: Arc<A>,
    tokens: TokenStore,
    state: watch::Sender<BootstrapState>,
}

impl<A: AuthApi> SessionService<A> {
    pub fn new(api: Arc<A>, tokens: TokenStore) -> Self {
        let (state, _) = watch::channel(BootstrapState::NoSession);
        Self { api, tokens, state }
    }

    /// Run the startup check once and publish its outcome.
    pub async fn bootstrap(&self) -> AppResult<SessionSnapshot> {
        self.state.send_replace(BootstrapState::Loading);
        let outcome = SessionBootstrap::new(Arc::clone(&self.api), self.tokens.clone())
            .run()
            .await;

        // A storage failure still has to leave the loading state.
        let state = match outcome {
            Ok(state) => state,
            Err(err) => {
                self.state.send_replace(BootstrapState::Anonymous);
                return Err(err);
            }
        };
        let snapshot = state.snapshot();
        self.state.send_replace(state);
        Ok(snapshot)
    }

    /// Exchange credentials, persist the pair, then fetch the user.
    pub async fn login(&self, identifier: &str, password: &str) -> AppResult<CurrentUser> {
        let pair = self.api.login(identifier, password).await?;
        let user = self.establish(&pair).await?;
        info!(user_id = %user.id, role = %user.role, "Logged in");
        Ok(user)
    }

    /// Register, persist the pair, then fetch the user.
    pub async fn signup(&self, request: &SignupRequest) -> AppResult<CurrentUser> {
        let pair = self.api.signup(request).await?;
        let user = self.establish(&pair).await?;
        info!(user_id = %user.id, role = %user.role, "Signed up and logged in");
        Ok(user)
    }

    /// Drop the stored tokens and become anonymous.
    pub fn logout(&self) -> AppResult<()> {
        self.tokens.clear()?;
        self.state.send_replace(BootstrapState::Anonymous);
        info!("Logged out");
        Ok(())
    }

    async fn establish(&self, pair: &TokenPair) -> AppResult<CurrentUser> {
        self.tokens.save(pair)?;
        let user = self.api.me().await?;
        self.state
            .send_replace(BootstrapState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Current state.
    pub fn state(&self) -> BootstrapState {
        self.state.borrow().clone()
    }

    /// Current loading flag and user.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.state.borrow().user().cloned()
    }

    /// Receive every state change.
    pub fn subscribe(&self) -> watch::Receiver<BootstrapState> {
        self.state.subscribe()
    }

    /// The token store this session owns.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }
}
