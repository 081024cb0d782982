//! Chat rooms and message history over REST.

use talent_core::result::AppResult;
use talent_core::types::{ItemList, RoomId};
use talent_entity::chat::{ChatMessage, ChatMessageCreate, ChatRoom};

use crate::client::ApiClient;

impl ApiClient {
    /// Rooms the caller participates in.
    pub async fn list_chat_rooms(&self) -> AppResult<Vec<ChatRoom>> {
        let list: ItemList<ChatRoom> = self.get("/chat/rooms").await?;
        Ok(list.items)
    }

    /// Full history of a room, oldest first.
    pub async fn list_chat_messages(&self, room: RoomId) -> AppResult<Vec<ChatMessage>> {
        self.get(&format!("/chat/{room}/messages")).await
    }

    /// Post a message without a socket.
    pub async fn post_chat_message(&self, room: RoomId, content: &str) -> AppResult<ChatMessage> {
        let body = ChatMessageCreate {
            content: content.to_string(),
        };
        self.post(&format!("/chat/{room}/messages"), &body).await
    }
}
