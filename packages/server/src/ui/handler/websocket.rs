//! WebSocket connection handlers.
//!
//! One session per connection: `Connecting → Active → Closed`. The socket is
//! split into a writer task (drains the member's outbox) and a reader task
//! (relays inbound frames). Whichever ends first stops the other, then the
//! leave finalizer runs exactly once.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::{IntoResponse, Response},
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{Member, RoomName, SessionId, Username},
    ui::state::AppState,
    usecase::{JoinRoomUseCase, LeaveRoomUseCase, RelayMessageUseCase},
};

/// `GET /ws/{room}/{username}`
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path((room, username)): Path<(String, String)>,
) -> impl IntoResponse {
    upgrade(ws, state, Some(room.as_str()), Some(username.as_str()))
}

/// `GET /ws/{room}`: username falls back to the default
pub async fn websocket_room_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> impl IntoResponse {
    upgrade(ws, state, Some(room.as_str()), None)
}

/// `GET /ws`: room and username fall back to the defaults
pub async fn websocket_default_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    upgrade(ws, state, None, None)
}

fn upgrade(
    ws: WebSocketUpgrade,
    state: Arc<AppState>,
    room: Option<&str>,
    username: Option<&str>,
) -> Response {
    let room = RoomName::normalize(room);
    let username = Username::normalize(username);
    tracing::info!("Upgrading connection for '{}' in room '{}'", username, room);

    ws.on_upgrade(move |socket| handle_socket(socket, state, room, username))
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    room: RoomName,
    username: Username,
) {
    let session_id = SessionId::generate();
    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this session to receive room traffic
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // Connecting → Active
    JoinRoomUseCase::new(state.registry.clone())
        .execute(&room, Member::new(session_id, username.clone(), tx))
        .await;

    // Forward room traffic to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    // Relay frames from this client to the room
    let relay = RelayMessageUseCase::new(state.registry.clone());
    let recv_room = room.clone();
    let recv_username = username.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket receive error for '{}': {}", recv_username, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    relay.execute(&recv_room, &recv_username, text.as_str()).await;
                }
                Message::Binary(bytes) => match std::str::from_utf8(&bytes) {
                    Ok(text) => {
                        relay.execute(&recv_room, &recv_username, text).await;
                    }
                    Err(_) => {
                        tracing::debug!("Ignoring non UTF-8 binary frame from '{}'", recv_username);
                    }
                },
                Message::Close(_) => {
                    tracing::debug!("'{}' requested close", recv_username);
                    break;
                }
                // ping/pong is answered by the protocol layer
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, stop the other and wait for it, so
    // nothing from this session can be relayed after its leave event.
    tokio::select! {
        _ = &mut recv_task => {
            send_task.abort();
            let _ = send_task.await;
        }
        _ = &mut send_task => {
            recv_task.abort();
            let _ = recv_task.await;
        }
    };

    // Active → Closed
    LeaveRoomUseCase::new(state.registry.clone())
        .execute(&room, session_id, &username)
        .await;
}
