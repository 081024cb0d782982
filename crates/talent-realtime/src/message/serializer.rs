//! JSON encoding of chat frames.

use super::types::{ClientFrame, ServerFrame};

/// Decode a text frame from the server.
pub fn decode_server_frame(text: &str) -> Result<ServerFrame, serde_json::Error> {
    serde_json::from_str(text)
}

/// Encode an outgoing frame.
pub fn encode_client_frame(frame: &ClientFrame) -> Result<String, serde_json::Error> {
    serde_json::to_string(frame)
}
