//! In-process fakes of the transport and history seams.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use talent_core::AppError;
use talent_core::result::AppResult;
use talent_core::types::{MessageId, RoomId, Timestamp, UserId};
use talent_entity::chat::ChatMessage;
use talent_entity::user::TokenPair;
use talent_storage::{MemoryStore, TokenStore};

use crate::connection::{ChatSocket, ChatTransport, Connection, SocketEvent};
use crate::message::{ClientFrame, ServerFrame};

use super::notice::Notice;
use super::session::ChatSession;

#[derive(Default)]
struct Shared {
    journal: Mutex<Vec<String>>,
    sent: Mutex<Vec<ClientFrame>>,
    senders: Mutex<Vec<mpsc::Sender<SocketEvent>>>,
    open_flags: Mutex<Vec<Arc<AtomicBool>>>,
    preload: Mutex<Vec<ChatMessage>>,
}

/// Records connects, closes and sends in one journal.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    shared: Arc<Shared>,
    fail: bool,
}

impl FakeTransport {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Frames delivered on the next connection before anyone reads it.
    pub fn preload(&self, messages: Vec<ChatMessage>) {
        *self.shared.preload.lock().unwrap() = messages;
    }

    /// Push an event on the most recent connection.
    pub fn push(&self, event: SocketEvent) {
        let senders = self.shared.senders.lock().unwrap();
        senders.last().unwrap().try_send(event).unwrap();
    }

    /// Mark every socket as no longer open.
    pub fn drop_all(&self) {
        for flag in self.shared.open_flags.lock().unwrap().iter() {
            flag.store(false, Ordering::SeqCst);
        }
    }

    pub fn journal(&self) -> Vec<String> {
        self.shared.journal.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<ClientFrame> {
        self.shared.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn connect(&self, url: &str) -> AppResult<Connection> {
        if self.fail {
            return Err(AppError::realtime("connection refused"));
        }
        let (tx, rx) = mpsc::channel(16);
        for message in self.shared.preload.lock().unwrap().drain(..) {
            tx.try_send(SocketEvent::Frame(ServerFrame::Message { message }))
                .unwrap();
        }

        let open = Arc::new(AtomicBool::new(true));
        let index = {
            let mut senders = self.shared.senders.lock().unwrap();
            senders.push(tx);
            senders.len() - 1
        };
        self.shared.open_flags.lock().unwrap().push(Arc::clone(&open));
        self.shared
            .journal
            .lock()
            .unwrap()
            .push(format!("connect:{url}"));

        Ok(Connection {
            socket: Box::new(FakeSocket {
                index,
                open,
                shared: Arc::clone(&self.shared),
            }),
            events: rx,
        })
    }
}

struct FakeSocket {
    index: usize,
    open: Arc<AtomicBool>,
    shared: Arc<Shared>,
}

#[async_trait]
impl ChatSocket for FakeSocket {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn send(&mut self, frame: &ClientFrame) -> AppResult<()> {
        self.shared.sent.lock().unwrap().push(frame.clone());
        Ok(())
    }

    async fn close(&mut self) -> AppResult<()> {
        self.open.store(false, Ordering::SeqCst);
        self.shared
            .journal
            .lock()
            .unwrap()
            .push(format!("close:{}", self.index));
        Ok(())
    }
}

/// Serves canned history per room.
#[derive(Clone, Default)]
pub(crate) struct FakeHistory {
    rooms: Arc<Mutex<HashMap<RoomId, Vec<ChatMessage>>>>,
    calls: Arc<AtomicUsize>,
}

impl FakeHistory {
    pub fn set(&self, room: RoomId, messages: Vec<ChatMessage>) {
        self.rooms.lock().unwrap().insert(room, messages);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl super::history::ChatHistory for FakeHistory {
    async fn history(&self, room: RoomId) -> AppResult<Vec<ChatMessage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .get(&room)
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) fn message(room: RoomId) -> ChatMessage {
    ChatMessage {
        id: MessageId::new(),
        application_id: room,
        sender_id: UserId::new(),
        sender_name: None,
        sender_username: None,
        content: "hi".to_string(),
        created_at: Timestamp::now(),
    }
}

pub(crate) fn session_for(
    transport: &FakeTransport,
    history: &FakeHistory,
    token: Option<&str>,
) -> (ChatSession, mpsc::Receiver<Notice>) {
    let tokens = TokenStore::new(Arc::new(MemoryStore::new()));
    if let Some(token) = token {
        tokens
            .save(&TokenPair {
                access_token: token.to_string(),
                refresh_token: "r".to_string(),
                token_type: "bearer".to_string(),
            })
            .unwrap();
    }
    let (tx, rx) = mpsc::channel(16);
    let chat = ChatSession::new(
        UserId::new(),
        "http://127.0.0.1:8000",
        tokens,
        Arc::new(transport.clone()),
        Arc::new(history.clone()),
        tx,
    );
    (chat, rx)
}
