//! Credential exchange payloads.

use serde::{Deserialize, Serialize};

use super::role::SignupRole;

/// Access/refresh bearer token pair issued by login, signup, and refresh.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived credential sent with every request.
    pub access_token: String,
    /// Longer-lived credential exchanged for a new pair.
    pub refresh_token: String,
    /// Token scheme, normally `bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("token_type", &self.token_type)
            .finish_non_exhaustive()
    }
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// New account registration.
#[derive(Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Self-reported sex.
    pub sex: String,
    /// Age in years.
    pub age: u32,
    /// Email address.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
    /// Requested role.
    pub role: SignupRole,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Login body: the backend accepts either an email or a username.
#[derive(Clone, Serialize)]
#[serde(untagged)]
pub enum Credentials {
    /// Identifier contained `@`.
    Email {
        /// Email address.
        email: String,
        /// Password.
        password: String,
    },
    /// Any other identifier.
    Username {
        /// Login name.
        username: String,
        /// Password.
        password: String,
    },
}

impl Credentials {
    /// Build credentials from a free-form identifier. The identifier is
    /// trimmed; anything containing `@` is treated as an email address.
    pub fn from_identifier(identifier: &str, password: &str) -> Self {
        let normalized = identifier.trim().to_string();
        if normalized.contains('@') {
            Self::Email {
                email: normalized,
                password: password.to_string(),
            }
        } else {
            Self::Username {
                username: normalized,
                password: password.to_string(),
            }
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email { email, .. } => f.debug_struct("Email").field("email", email).finish(),
            Self::Username { username, .. } => {
                f.debug_struct("Username").field("username", username).finish()
            }
        }
    }
}

/// Body of `POST /auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The stored refresh token.
    pub refresh_token: String,
}
