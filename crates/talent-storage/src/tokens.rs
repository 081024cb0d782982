//! Session token store.
//!
//! Purely local semantics: no network calls and no inspection of token
//! contents or expiry. Writes are last-write-wins.

use std::sync::Arc;

use tracing::debug;

use talent_core::result::AppResult;
use talent_core::traits::KeyValueStore;
use talent_entity::user::TokenPair;

use crate::keys;

/// Owner of the access/refresh token pair.
///
/// Cloning is cheap; clones share the same backing store, which is how the
/// HTTP client, the chat transport, and the session service all see one
/// session.
#[derive(Debug, Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    /// Wrap a key-value backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist both tokens, overwriting any previous pair.
    pub fn save(&self, tokens: &TokenPair) -> AppResult<()> {
        self.store.set(keys::ACCESS_TOKEN, &tokens.access_token)?;
        self.store.set(keys::REFRESH_TOKEN, &tokens.refresh_token)?;
        debug!("Saved session token pair");
        Ok(())
    }

    /// Remove both tokens unconditionally. Idempotent.
    pub fn clear(&self) -> AppResult<()> {
        self.store.remove(keys::ACCESS_TOKEN)?;
        self.store.remove(keys::REFRESH_TOKEN)?;
        debug!("Cleared session token pair");
        Ok(())
    }

    /// Whether a non-empty access token is stored. Does not validate it.
    pub fn has_access_token(&self) -> AppResult<bool> {
        Ok(self.access_token()?.is_some())
    }

    /// Raw stored access token.
    pub fn access_token(&self) -> AppResult<Option<String>> {
        self.non_empty(keys::ACCESS_TOKEN)
    }

    /// Raw stored refresh token.
    pub fn refresh_token(&self) -> AppResult<Option<String>> {
        self.non_empty(keys::REFRESH_TOKEN)
    }

    /// The underlying key-value backend, shared with other persisted state.
    pub fn backend(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    fn non_empty(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.store.get(key)?.filter(|v| !v.is_empty()))
    }
}
