//! Shared fixtures for integration tests.
//!
//! Starts the relay in-process on an ephemeral port and provides a small
//! WebSocket client toolkit.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use hiroba_server::{
    domain::RoomName,
    ui::{serve, state::AppState},
};
use serde_json::Value;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle, time::timeout};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

/// How long a test waits for an expected frame
pub const RECV_TIMEOUT: Duration = Duration::from_secs(3);

pub type WsClient = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Relay server running inside the test process
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Arc<AppState>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let state = AppState::in_memory();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server_state = state.clone();
        let handle = tokio::spawn(async move {
            let shutdown = async move {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = serve(listener, server_state, shutdown).await {
                eprintln!("test server error: {e}");
            }
        });

        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self, path: &str) -> String {
        format!("ws://{}{}", self.addr, path)
    }

    /// Connect a WebSocket client to `path` (e.g. `/ws/room/alice`)
    pub async fn connect(&self, path: &str) -> WsClient {
        let (ws, _response) = connect_async(self.ws_url(path))
            .await
            .expect("Failed to connect WebSocket");
        ws
    }

    /// Connect and consume the client's own join announcement
    pub async fn join(&self, room: &str, username: &str) -> WsClient {
        let mut ws = self.connect(&format!("/ws/{room}/{username}")).await;
        let event = recv_event(&mut ws).await;
        assert_eq!(event["type"], "join");
        ws
    }

    /// Wait until `room` is absent from the registry
    pub async fn wait_room_removed(&self, room: &str) {
        let room = room.to_string();
        timeout(RECV_TIMEOUT, async {
            loop {
                let rooms = self.state.registry.rooms().await;
                if rooms.iter().all(|r| r.name.as_str() != room) {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("room was not removed in time");
    }

    /// Wait until `room` has exactly `count` members
    pub async fn wait_member_count(&self, room: &str, count: usize) {
        let room = RoomName::normalize(Some(room));
        timeout(RECV_TIMEOUT, async {
            loop {
                if self.state.registry.members(&room).await.len() == count {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("member count not reached in time");
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

/// Receive the next text frame as JSON, skipping control frames
pub async fn recv_event(ws: &mut WsClient) -> Value {
    timeout(RECV_TIMEOUT, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => {
                    return serde_json::from_str::<Value>(text.as_str())
                        .expect("server sent invalid JSON");
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => panic!("WebSocket error: {e}"),
                None => panic!("WebSocket closed"),
            }
        }
    })
    .await
    .expect("timed out waiting for event")
}

/// Assert that no text frame arrives within `wait`
pub async fn assert_no_event(ws: &mut WsClient, wait: Duration) {
    let result = timeout(wait, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => return Some(text.to_string()),
                Some(Ok(_)) => continue,
                _ => return None,
            }
        }
    })
    .await;
    if let Ok(Some(text)) = result {
        panic!("unexpected event: {text}");
    }
}

pub async fn send_text(ws: &mut WsClient, text: &str) {
    ws.send(Message::Text(text.into()))
        .await
        .expect("Failed to send frame");
}
