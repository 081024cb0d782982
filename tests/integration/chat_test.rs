//! End-to-end chat test: a loopback WebSocket server plus mocked history.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::handshake::server::{Request, Response};
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use talent_core::config::RealtimeConfig;
use talent_realtime::{ChatSession, ChatUpdate, NoticeLevel, WsTransport};

use helpers::{OTHER_ID, ROOM_ID, TestApp, USER_ID, message_json};

const M1: &str = "3e2d1c0b-9a8f-4e7d-8c6b-5a4f3e2d1c01";
const M2: &str = "3e2d1c0b-9a8f-4e7d-8c6b-5a4f3e2d1c02";

/// What the server saw from the client.
struct Seen {
    path: String,
    frame: String,
}

/// Accept one connection, replay a duplicate of the history message, an
/// unknown event and a new message, wait for one client frame, then reject
/// the session with 4403.
async fn spawn_server() -> (String, oneshot::Receiver<Seen>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let (seen_tx, seen_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut request_path = String::new();
        let ws = tokio_tungstenite::accept_hdr_async(stream, |req: &Request, resp: Response| {
            request_path = req.uri().to_string();
            Ok(resp)
        })
        .await
        .unwrap();
        let (mut sink, mut stream) = ws.split();

        for frame in [
            json!({"event": "message", "message": message_json(M1, OTHER_ID, "hello")}),
            json!({"event": "typing", "user_id": OTHER_ID}),
            json!({"event": "message", "message": message_json(M2, OTHER_ID, "are you there?")}),
        ] {
            sink.send(Message::text(frame.to_string())).await.unwrap();
        }

        let frame = loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => break text.as_str().to_string(),
                Some(Ok(_)) => continue,
                other => panic!("client went away: {other:?}"),
            }
        };
        let _ = seen_tx.send(Seen {
            path: request_path,
            frame,
        });

        sink.send(Message::Close(Some(CloseFrame {
            code: CloseCode::from(4403),
            reason: "Forbidden".into(),
        })))
        .await
        .unwrap();
        while stream.next().await.is_some() {}
    });

    (origin, seen_rx)
}

#[tokio::test]
async fn test_chat_room_round_trip() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("GET"))
        .and(path(format!("/chat/{ROOM_ID}/messages")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([message_json(M1, OTHER_ID, "hello")])),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let (ws_origin, seen) = spawn_server().await;
    let (notice_tx, mut notices) = mpsc::channel(8);
    let mut session = ChatSession::new(
        USER_ID.parse().unwrap(),
        ws_origin,
        app.tokens.clone(),
        Arc::new(WsTransport::new(&RealtimeConfig::default())),
        Arc::new(app.client.clone()),
        notice_tx,
    );

    session.select_room(ROOM_ID.parse().unwrap()).await.unwrap();
    assert!(session.is_connected());

    // Wait until the live message has been applied.
    timeout(Duration::from_secs(5), async {
        while session.messages().len() < 2 {
            match session.next_update().await {
                Some(ChatUpdate::Message(_)) => {}
                other => panic!("unexpected update {other:?}"),
            }
        }
    })
    .await
    .unwrap();

    let ids: Vec<String> = session.messages().iter().map(|m| m.id.to_string()).collect();
    assert_eq!(ids, vec![M1.to_string(), M2.to_string()]);
    assert!(!session.is_mine(&session.messages()[0]));

    assert!(session.send("  hi  ").await.unwrap());
    assert_eq!(session.draft(), "");

    let seen = timeout(Duration::from_secs(5), seen).await.unwrap().unwrap();
    assert_eq!(seen.path, format!("/chat/ws/{ROOM_ID}?token=a-1"));
    let frame: serde_json::Value = serde_json::from_str(&seen.frame).unwrap();
    assert_eq!(frame, json!({"content": "hi"}));

    let update = timeout(Duration::from_secs(5), session.next_update())
        .await
        .unwrap();
    match update {
        Some(ChatUpdate::Closed { code, reason }) => {
            assert_eq!(code, Some(4403));
            assert_eq!(reason, "Forbidden");
        }
        other => panic!("expected close, got {other:?}"),
    }
    assert!(!session.is_connected());

    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Chat connection closed (4403): Forbidden");

    // The socket is gone, so the text is kept as a draft instead.
    assert!(!session.send("still there?").await.unwrap());
    assert_eq!(session.draft(), "still there?");
}

#[tokio::test]
async fn test_unreachable_socket_still_loads_history() {
    let app = TestApp::with_tokens("a-1", "r-1").await;
    Mock::given(method("GET"))
        .and(path(format!("/chat/{ROOM_ID}/messages")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([message_json(M1, USER_ID, "mine")])),
        )
        .mount(&app.server)
        .await;

    // Bind then drop, so nothing listens on the port.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let (notice_tx, mut notices) = mpsc::channel(8);
    let mut session = ChatSession::new(
        USER_ID.parse().unwrap(),
        origin,
        app.tokens.clone(),
        Arc::new(WsTransport::new(&RealtimeConfig::default())),
        Arc::new(app.client.clone()),
        notice_tx,
    );

    session.select_room(ROOM_ID.parse().unwrap()).await.unwrap();

    assert!(!session.is_connected());
    assert_eq!(session.messages().len(), 1);
    assert!(session.is_mine(&session.messages()[0]));
    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.message, "Chat websocket connection error");
}
