//! Frames exchanged over the chat socket.

use serde::{Deserialize, Serialize};

use talent_entity::chat::ChatMessage;

/// Frames sent by the server, discriminated by `event`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerFrame {
    /// A message was posted to the room (including our own, echoed back).
    Message {
        /// The stored message.
        message: ChatMessage,
    },
    /// Any event this client does not handle.
    #[serde(other)]
    Unknown,
}

/// Frame sent by the client to post a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFrame {
    /// Trimmed, non-empty message text.
    pub content: String,
}
