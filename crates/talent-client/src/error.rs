//! Normalization of API error bodies into user-facing messages.

use std::fmt;

use serde_json::Value;

use talent_core::AppError;

/// The call shape that failed, used in fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// JSON request/response.
    Request,
    /// Multipart form upload.
    Upload,
    /// Binary download.
    Download,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "Request"),
            Self::Upload => write!(f, "Upload"),
            Self::Download => write!(f, "Download"),
        }
    }
}

/// Generic message used when the body carries nothing readable.
pub fn fallback_message(operation: Operation, status: u16) -> String {
    format!("{operation} failed ({status})")
}

/// Extract a human-readable message from a JSON error body.
///
/// Looks at `detail` first, then `message`. A `detail` list (validation
/// errors) is joined from the entries' `msg` fields.
pub fn message_from_body(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    message_from_value(&value, "detail").or_else(|| message_from_value(&value, "message"))
}

fn message_from_value(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(entries) => {
            let parts: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str).or_else(|| e.as_str()))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

/// Build the error for a non-success response.
pub fn error_from_response(operation: Operation, status: u16, body: &[u8]) -> AppError {
    let message =
        message_from_body(body).unwrap_or_else(|| fallback_message(operation, status));
    AppError::http(status, message)
}
