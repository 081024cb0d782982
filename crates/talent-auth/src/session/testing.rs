//! Scripted `AuthApi` fake with call counting.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use talent_core::AppError;
use talent_core::result::AppResult;
use talent_core::types::UserId;
use talent_entity::user::{CurrentUser, SignupRequest, TokenPair, UserRole};
use talent_storage::{MemoryStore, TokenStore};

use crate::api::AuthApi;

#[derive(Debug, Default)]
pub(crate) struct FakeAuth {
    pub me_results: Mutex<VecDeque<AppResult<CurrentUser>>>,
    pub refresh_result: Mutex<Option<AppResult<TokenPair>>>,
    pub login_result: Mutex<Option<AppResult<TokenPair>>>,
    pub calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
}

impl FakeAuth {
    pub fn with_me(results: Vec<AppResult<CurrentUser>>) -> Self {
        Self {
            me_results: Mutex::new(results.into()),
            ..Self::default()
        }
    }

    pub fn refreshing(self, result: AppResult<TokenPair>) -> Self {
        *self.refresh_result.lock().unwrap() = Some(result);
        self
    }

    pub fn logging_in(self, result: AppResult<TokenPair>) -> Self {
        *self.login_result.lock().unwrap() = Some(result);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn me(&self) -> AppResult<CurrentUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.me_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::http(401, "Invalid token")))
    }

    async fn refresh(&self, _refresh_token: &str) -> AppResult<TokenPair> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.refresh_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(AppError::http(401, "Invalid refresh token")))
    }

    async fn login(&self, _identifier: &str, _password: &str) -> AppResult<TokenPair> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.login_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(AppError::http(401, "Invalid credentials")))
    }

    async fn signup(&self, _request: &SignupRequest) -> AppResult<TokenPair> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(pair("signed-up", "signed-up-r"))
    }
}

pub(crate) fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        token_type: "bearer".to_string(),
    }
}

pub(crate) fn user(role: UserRole) -> CurrentUser {
    CurrentUser {
        id: UserId::new(),
        username: "alice".to_string(),
        name: "Alice".to_string(),
        sex: "female".to_string(),
        age: 30,
        email: "alice@example.com".to_string(),
        role,
        is_active: true,
        is_verified: true,
    }
}

pub(crate) fn tokens_with(access: Option<&str>, refresh: Option<&str>) -> TokenStore {
    let tokens = TokenStore::new(Arc::new(MemoryStore::new()));
    tokens
        .save(&pair(access.unwrap_or_default(), refresh.unwrap_or_default()))
        .unwrap();
    tokens
}
