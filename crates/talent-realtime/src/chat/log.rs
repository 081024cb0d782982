//! Append-only message list with id de-duplication.

use std::collections::HashSet;

use talent_core::types::MessageId;
use talent_entity::chat::ChatMessage;

/// Messages of one room in receipt order.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    seen: HashSet<MessageId>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless a message with the same id is already present.
    pub fn push(&mut self, message: ChatMessage) -> bool {
        if !self.seen.insert(message.id) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Append many, returning how many were new.
    pub fn extend(&mut self, messages: impl IntoIterator<Item = ChatMessage>) -> usize {
        let mut added = 0;
        for message in messages {
            if self.push(message) {
                added += 1;
            }
        }
        added
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.seen.clear();
    }

    pub fn as_slice(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
