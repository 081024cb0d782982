//! User account models.

use serde::{Deserialize, Serialize};

use talent_core::types::UserId;

use super::role::UserRole;

/// Server-asserted identity of the caller, re-fetched on every bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user identifier.
    pub id: UserId,
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
    /// Role used by the route guards.
    pub role: UserRole,
    /// Whether the account is enabled.
    pub is_active: bool,
    /// Whether the email address was verified.
    pub is_verified: bool,
}

impl CurrentUser {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Entry in the admin user listing. Same shape as [`CurrentUser`].
pub type UserListItem = CurrentUser;

/// Filters for `GET /admin/users`.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
    /// Restrict to one role.
    pub role: Option<UserRole>,
    /// Restrict by active flag.
    pub is_active: Option<bool>,
    /// Free-text search.
    pub q: Option<String>,
}

/// Admin update of a user's role or active flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Response of an admin user update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateResponse {
    /// The updated user.
    pub user: UserListItem,
    /// Confirmation text.
    pub message: String,
}
