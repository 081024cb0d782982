//! Transport seam between the room session and the socket library.

use async_trait::async_trait;
use tokio::sync::mpsc;

use talent_core::result::AppResult;

use crate::message::{ClientFrame, ServerFrame};

/// Something that happened on an open socket.
#[derive(Debug, Clone, PartialEq)]
pub enum SocketEvent {
    /// A decoded server frame.
    Frame(ServerFrame),
    /// The server closed the socket.
    Closed {
        /// Close code, e.g. 4403 when the token or room access was rejected.
        code: Option<u16>,
        /// Close reason text.
        reason: String,
    },
    /// The socket failed.
    Error(String),
}

/// Write half of a chat socket.
#[async_trait]
pub trait ChatSocket: Send + Sync {
    /// Whether frames can currently be sent.
    fn is_open(&self) -> bool;

    /// Send one frame.
    async fn send(&mut self, frame: &ClientFrame) -> AppResult<()>;

    /// Close the socket. Idempotent.
    async fn close(&mut self) -> AppResult<()>;
}

/// Opens chat sockets.
#[async_trait]
pub trait ChatTransport: Send + Sync + 'static {
    /// Connect to `url`. Inbound events arrive on the returned receiver in
    /// arrival order and are buffered until read.
    async fn connect(&self, url: &str) -> AppResult<Connection>;
}

/// An open socket plus its inbound event queue.
pub struct Connection {
    pub socket: Box<dyn ChatSocket>,
    pub events: mpsc::Receiver<SocketEvent>,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("open", &self.socket.is_open())
            .finish_non_exhaustive()
    }
}
