//! Shared state for one CLI invocation.

use std::sync::Arc;

use tracing::debug;

use talent_auth::{GuardDecision, Route, SessionService, SessionSnapshot, guard, require};
use talent_client::ApiClient;
use talent_core::AppError;
use talent_core::config::AppConfig;
use talent_core::result::AppResult;
use talent_entity::user::CurrentUser;
use talent_storage::{FileStore, TokenStore};

use crate::output::OutputFormat;

/// Configuration, API client and session, wired once per process.
#[derive(Debug)]
pub struct Context {
    pub config: AppConfig,
    pub format: OutputFormat,
    pub client: ApiClient,
    pub session: SessionService<ApiClient>,
}

impl Context {
    /// Open the persisted session store and build the client around it.
    pub fn open(config: AppConfig, format: OutputFormat) -> AppResult<Self> {
        let store = FileStore::open(&config.session.store_path)?;
        let tokens = TokenStore::new(Arc::new(store));
        let client = ApiClient::new(&config.api, tokens.clone())?;
        let session = SessionService::new(Arc::new(client.clone()), tokens);

        Ok(Self {
            config,
            format,
            client,
            session,
        })
    }

    /// Run the startup session check.
    pub async fn resolve(&self) -> AppResult<SessionSnapshot> {
        let snapshot = self.session.bootstrap().await?;
        debug!(authenticated = snapshot.is_authenticated(), "Session resolved");
        Ok(snapshot)
    }

    /// Resolve the session and pass the guard of `route`, returning the user.
    pub async fn enter(&self, route: Route) -> AppResult<CurrentUser> {
        let snapshot = self.resolve().await?;
        require(route, &snapshot)?;
        snapshot
            .user
            .ok_or_else(|| AppError::authentication("Please log in to continue"))
    }

    /// Resolve the session for the login screen. Returns the user when one
    /// is already logged in.
    pub async fn enter_login(&self) -> AppResult<Option<CurrentUser>> {
        let snapshot = self.resolve().await?;
        match guard(Route::Login, &snapshot) {
            GuardDecision::Redirect(_) => Ok(snapshot.user),
            _ => Ok(None),
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        self.session.tokens()
    }
}
