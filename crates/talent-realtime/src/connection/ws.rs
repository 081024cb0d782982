//! `tokio-tungstenite` transport.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};

use talent_core::AppError;
use talent_core::config::RealtimeConfig;
use talent_core::result::AppResult;

use crate::message::serializer::{decode_server_frame, encode_client_frame};
use crate::message::ClientFrame;

use super::transport::{ChatSocket, ChatTransport, Connection, SocketEvent};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connects real WebSockets.
#[derive(Debug, Clone)]
pub struct WsTransport {
    connect_timeout: Duration,
    buffer: usize,
}

impl WsTransport {
    pub fn new(config: &RealtimeConfig) -> Self {
        Self {
            connect_timeout: config.connect_timeout(),
            buffer: config.frame_buffer_size.max(1),
        }
    }
}

#[async_trait]
impl ChatTransport for WsTransport {
    async fn connect(&self, url: &str) -> AppResult<Connection> {
        let (stream, _) = timeout(self.connect_timeout, connect_async(url))
            .await
            .map_err(|_| AppError::realtime("Chat websocket connection timed out"))??;
        info!("Chat socket open");

        let (sink, stream) = stream.split();
        let open = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::channel(self.buffer);
        let reader = tokio::spawn(read_loop(stream, tx, Arc::clone(&open)));

        Ok(Connection {
            socket: Box::new(WsSocket { sink, open, reader }),
            events: rx,
        })
    }
}

/// Forward inbound frames until the socket ends or the session stops listening.
async fn read_loop(mut stream: SplitStream<WsStream>, tx: mpsc::Sender<SocketEvent>, open: Arc<AtomicBool>) {
    while let Some(item) = stream.next().await {
        let event = match item {
            Ok(Message::Text(text)) => match decode_server_frame(text.as_str()) {
                Ok(frame) => SocketEvent::Frame(frame),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed chat frame");
                    continue;
                }
            },
            Ok(Message::Close(frame)) => {
                open.store(false, Ordering::SeqCst);
                let (code, reason) = frame
                    .map(|f| (Some(u16::from(f.code)), f.reason.to_string()))
                    .unwrap_or((None, String::new()));
                info!(?code, reason = %reason, "Chat socket closed by server");
                let _ = tx.send(SocketEvent::Closed { code, reason }).await;
                break;
            }
            Ok(_) => continue,
            Err(e) => {
                open.store(false, Ordering::SeqCst);
                warn!(error = %e, "Chat socket error");
                let _ = tx.send(SocketEvent::Error(e.to_string())).await;
                break;
            }
        };

        if tx.send(event).await.is_err() {
            debug!("Chat session stopped listening");
            break;
        }
    }
    open.store(false, Ordering::SeqCst);
}

struct WsSocket {
    sink: SplitSink<WsStream, Message>,
    open: Arc<AtomicBool>,
    reader: JoinHandle<()>,
}

#[async_trait]
impl ChatSocket for WsSocket {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn send(&mut self, frame: &ClientFrame) -> AppResult<()> {
        if !self.is_open() {
            return Err(AppError::realtime("Chat socket is not open"));
        }
        let text = encode_client_frame(frame)?;
        self.sink.send(Message::text(text)).await?;
        Ok(())
    }

    async fn close(&mut self) -> AppResult<()> {
        if self.open.swap(false, Ordering::SeqCst) {
            // The peer may already be gone; closing is best effort.
            if let Err(e) = self.sink.send(Message::Close(None)).await {
                debug!(error = %e, "Close frame not delivered");
            }
            let _ = self.sink.close().await;
            info!("Chat socket closed");
        }
        self.reader.abort();
        Ok(())
    }
}

impl Drop for WsSocket {
    fn drop(&mut self) {
        self.reader.abort();
    }
}
