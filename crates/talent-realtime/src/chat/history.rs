//! Source of a room's past messages.

use async_trait::async_trait;

use talent_client::ApiClient;
use talent_core::result::AppResult;
use talent_core::types::RoomId;
use talent_entity::chat::ChatMessage;

/// Fetches the stored history of a room, oldest first.
#[async_trait]
pub trait ChatHistory: Send + Sync + 'static {
    async fn history(&self, room: RoomId) -> AppResult<Vec<ChatMessage>>;
}

#[async_trait]
impl ChatHistory for ApiClient {
    async fn history(&self, room: RoomId) -> AppResult<Vec<ChatMessage>> {
        self.list_chat_messages(room).await
    }
}
