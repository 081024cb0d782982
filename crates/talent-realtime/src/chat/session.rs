//! Live view of one chat room.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use talent_core::AppError;
use talent_core::result::AppResult;
use talent_core::types::{RoomId, UserId};
use talent_entity::chat::ChatMessage;
use talent_storage::TokenStore;

use crate::connection::{ChatTransport, Connection, SocketEvent, ws_url};
use crate::message::validator::outgoing_content;
use crate::message::{ClientFrame, ServerFrame};

use super::draft::DraftStore;
use super::history::ChatHistory;
use super::log::MessageLog;
use super::notice::Notice;

const CONNECT_ERROR: &str = "Chat websocket connection error";
const HISTORY_ERROR: &str = "Failed to load chat messages";

/// Change produced by an inbound socket event.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatUpdate {
    /// A new message was appended to the log.
    Message(ChatMessage),
    /// The socket ended. No reconnect follows.
    Closed {
        code: Option<u16>,
        reason: String,
    },
}

/// One user's chat screen: at most one room and one socket at a time.
///
/// Selecting a room closes the previous socket, opens the new one, then
/// loads history. Frames that arrive while history loads stay queued on the
/// connection and are applied after it, skipping ids already present.
pub struct ChatSession {
    user: UserId,
    origin: String,
    tokens: TokenStore,
    transport: Arc<dyn ChatTransport>,
    history: Arc<dyn ChatHistory>,
    drafts: DraftStore,
    notices: mpsc::Sender<Notice>,
    room: Option<RoomId>,
    connection: Option<Connection>,
    log: MessageLog,
    draft: String,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("user", &self.user)
            .field("room", &self.room)
            .field("connected", &self.is_connected())
            .field("messages", &self.log.len())
            .finish()
    }
}

impl ChatSession {
    /// Create a session for `user` against the API `origin`.
    pub fn new(
        user: UserId,
        origin: impl Into<String>,
        tokens: TokenStore,
        transport: Arc<dyn ChatTransport>,
        history: Arc<dyn ChatHistory>,
        notices: mpsc::Sender<Notice>,
    ) -> Self {
        let drafts = DraftStore::new(tokens.backend());
        Self {
            user,
            origin: origin.into(),
            tokens,
            transport,
            history,
            drafts,
            notices,
            room: None,
            connection: None,
            log: MessageLog::new(),
            draft: String::new(),
        }
    }

    /// Switch to `room`.
    ///
    /// Load and connect failures become notices rather than errors, so the
    /// screen stays usable with whatever loaded. Errors are returned only for
    /// local problems such as an unusable origin or storage failure.
    pub async fn select_room(&mut self, room: RoomId) -> AppResult<()> {
        self.leave().await;
        self.room = Some(room);
        info!(room = %room.short(), "Selecting chat room");

        // Token is read once; a later refresh does not touch this socket.
        let mut pending = None;
        if let Some(token) = self.tokens.access_token()? {
            let url = ws_url(&self.origin, room, &token)?;
            match self.transport.connect(&url).await {
                Ok(connection) => pending = Some(connection),
                Err(err) => {
                    warn!(room = %room.short(), error = %err, "Chat socket connect failed");
                    self.notify(Notice::error(CONNECT_ERROR));
                }
            }
        } else {
            debug!("No access token; loading history without a socket");
        }

        match self.history.history(room).await {
            Ok(messages) => {
                let added = self.log.extend(messages);
                debug!(room = %room.short(), added, "Loaded chat history");
            }
            Err(err) => {
                warn!(room = %room.short(), error = %err, "Chat history failed");
                let message = if err.message.is_empty() {
                    HISTORY_ERROR.to_string()
                } else {
                    err.message
                };
                self.notify(Notice::error(message));
            }
        }

        if let Some(mut connection) = pending {
            while let Ok(event) = connection.events.try_recv() {
                self.apply(event);
            }
            self.connection = Some(connection);
        }

        self.draft = self.drafts.load(self.user, room)?.unwrap_or_default();
        Ok(())
    }

    /// Wait for the next change from the socket.
    ///
    /// Returns `None` once there is no socket or it has ended. Cancel safe,
    /// so it can sit in a `select!` next to user input.
    pub async fn next_update(&mut self) -> Option<ChatUpdate> {
        loop {
            let event = self.connection.as_mut()?.events.recv().await;
            match event {
                Some(event) => {
                    if let Some(update) = self.apply(event) {
                        return Some(update);
                    }
                }
                None => {
                    self.connection = None;
                    return None;
                }
            }
        }
    }

    fn apply(&mut self, event: SocketEvent) -> Option<ChatUpdate> {
        match event {
            SocketEvent::Frame(ServerFrame::Message { message }) => {
                if Some(message.application_id) != self.room {
                    warn!(room = %message.application_id.short(), "Dropping message for another room");
                    return None;
                }
                if self.log.push(message.clone()) {
                    Some(ChatUpdate::Message(message))
                } else {
                    debug!(id = %message.id.short(), "Duplicate chat message skipped");
                    None
                }
            }
            SocketEvent::Frame(ServerFrame::Unknown) => {
                warn!("Ignoring unhandled chat event");
                None
            }
            SocketEvent::Closed { code, reason } => {
                let text = match (code, reason.is_empty()) {
                    (Some(code), false) => format!("Chat connection closed ({code}): {reason}"),
                    (Some(code), true) => format!("Chat connection closed ({code})"),
                    (None, _) => "Chat connection closed".to_string(),
                };
                self.notify(Notice::error(text));
                Some(ChatUpdate::Closed { code, reason })
            }
            SocketEvent::Error(error) => {
                warn!(error = %error, "Chat socket failed");
                self.notify(Notice::error(CONNECT_ERROR));
                Some(ChatUpdate::Closed {
                    code: None,
                    reason: error,
                })
            }
        }
    }

    /// Send `content` to the current room.
    ///
    /// Returns `Ok(false)` without sending when the trimmed text is empty or
    /// the socket is not open; in the latter case the text stays saved as
    /// the room's draft. Text over the length limit is also kept as the
    /// draft before the validation error is returned. A successful send
    /// clears the draft.
    pub async fn send(&mut self, content: &str) -> AppResult<bool> {
        let room = self
            .room
            .ok_or_else(|| AppError::validation("No chat room selected"))?;
        if content.trim().is_empty() {
            return Ok(false);
        }

        self.set_draft(content)?;

        let Some(trimmed) = outgoing_content(content)? else {
            return Ok(false);
        };

        let Some(connection) = self.connection.as_mut().filter(|c| c.socket.is_open()) else {
            debug!(room = %room.short(), "Socket not open, keeping draft");
            return Ok(false);
        };
        connection
            .socket
            .send(&ClientFrame {
                content: trimmed.to_string(),
            })
            .await?;

        self.drafts.clear(self.user, room)?;
        self.draft.clear();
        Ok(true)
    }

    /// Replace the current room's draft and persist it.
    pub fn set_draft(&mut self, text: &str) -> AppResult<()> {
        if let Some(room) = self.room {
            self.drafts.save(self.user, room, text)?;
        }
        self.draft = text.to_string();
        Ok(())
    }

    /// Close the socket and forget the room. The draft stays persisted.
    pub async fn leave(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            if let Err(err) = connection.socket.close().await {
                debug!(error = %err, "Chat socket close failed");
            }
        }
        if let Some(room) = self.room.take() {
            debug!(room = %room.short(), "Left chat room");
        }
        self.log.clear();
        self.draft.clear();
    }

    fn notify(&self, notice: Notice) {
        if let Err(e) = self.notices.try_send(notice) {
            warn!(error = %e, "Notice dropped");
        }
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.log.as_slice()
    }

    /// Whether `message` was sent by this session's user.
    pub fn is_mine(&self, message: &ChatMessage) -> bool {
        message.sender_id == self.user
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether a socket is open for the current room.
    pub fn is_connected(&self) -> bool {
        self.connection
            .as_ref()
            .is_some_and(|c| c.socket.is_open())
    }
}
