//! Checks applied to outgoing message text.

use talent_core::AppError;
use talent_core::result::AppResult;

/// Longest message the server accepts, in characters.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Trim a draft for sending. `None` means there is nothing to send.
pub fn outgoing_content(draft: &str) -> AppResult<Option<&str>> {
    let content = draft.trim();
    if content.is_empty() {
        return Ok(None);
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(AppError::validation(format!(
            "Message exceeds maximum length of {MAX_CONTENT_CHARS} characters"
        )));
    }
    Ok(Some(content))
}
