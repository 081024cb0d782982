//! User, role, and credential models.

pub mod auth;
pub mod model;
pub mod role;

pub use auth::{Credentials, RefreshRequest, SignupRequest, TokenPair};
pub use model::{CurrentUser, UserListItem, UserQuery, UserUpdate, UserUpdateResponse};
pub use role::{SignupRole, UserRole};
