//! Storage key builders for every persisted client entry.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the client writes.

use std::fmt::Display;

/// Prefix applied to all client storage keys.
const PREFIX: &str = "ti";

/// Key holding the access token.
pub const ACCESS_TOKEN: &str = "ti_access_token";

/// Key holding the refresh token.
pub const REFRESH_TOKEN: &str = "ti_refresh_token";

/// Key holding the unsent chat draft of one user in one room.
pub fn chat_draft(user_id: impl Display, room_id: impl Display) -> String {
    format!("{PREFIX}_chat_draft:{user_id}:{room_id}")
}
