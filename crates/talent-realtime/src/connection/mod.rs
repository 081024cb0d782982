//! Socket lifecycle: URL derivation, transport seam, tungstenite transport.

pub mod endpoint;
pub mod transport;
pub mod ws;

pub use transport::{ChatSocket, ChatTransport, Connection, SocketEvent};
pub use endpoint::ws_url;
pub use ws::WsTransport;
