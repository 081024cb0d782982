//! # talent-realtime
//!
//! Client side of the per-room chat WebSocket.
//!
//! ## Modules
//!
//! - `message` : tagged wire frames, JSON codec, outgoing content checks
//! - `connection` : ws URL derivation, transport traits, tungstenite transport
//! - `chat` : the room session (history + live frames), drafts, notices
//!
//! One room is live at a time. Switching rooms closes the old socket before
//! the new one opens, and a dropped socket is not reconnected.

pub mod chat;
pub mod connection;
pub mod message;

pub use chat::{ChatHistory, ChatSession, ChatUpdate, DraftStore, Notice, NoticeLevel};
pub use connection::{ChatSocket, ChatTransport, Connection, SocketEvent, WsTransport, ws_url};
pub use message::{ClientFrame, ServerFrame};
