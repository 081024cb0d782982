//! Persisted session configuration.

use serde::{Deserialize, Serialize};

/// Where the token pair and chat drafts are kept between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the JSON key-value file backing the session store.
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "data/session.json".to_string()
}
