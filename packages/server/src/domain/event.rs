//! Typed events exchanged within a room.
//!
//! Inbound frames are decoded into a [`ClientMessage`] (with every default
//! already applied). The session then stamps it with its own username and the
//! server clock to produce an [`Event`], which is what gets broadcast.

use serde_json::{Map, Value};

use super::value_object::{RoomName, SYSTEM_USER, Timestamp, Username};

/// Object id used by `object_move` when the client does not name one.
pub const DEFAULT_OBJECT_ID: &str = "cube-1";

/// Opaque key/value payload (e.g. `{ "x": 1.0, "y": 0.5 }`).
pub type Vector = Map<String, Value>;

/// A message sent by a client, after decoding and defaulting.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientMessage {
    Chat {
        text: String,
    },
    ObjectMove {
        id: String,
        position: Vector,
        rotation: Vector,
    },
    /// Any other `type`, kept for forward compatibility
    Other {
        kind: String,
        text: String,
    },
}

impl ClientMessage {
    /// Chat message carrying the raw frame (used when structured decode fails).
    pub fn raw_chat(raw: impl Into<String>) -> Self {
        Self::Chat { text: raw.into() }
    }
}

/// Kind-specific part of an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Chat {
        text: String,
    },
    ObjectMove {
        id: String,
        position: Vector,
        rotation: Vector,
    },
    Join {
        text: String,
    },
    Leave {
        text: String,
    },
    Other {
        kind: String,
        text: String,
    },
}

/// One broadcastable, timestamped event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Sender display name, or [`SYSTEM_USER`] for join/leave
    pub user: String,
    pub payload: EventPayload,
    pub ts: Timestamp,
}

impl Event {
    /// Re-emit a client message under the session's own username.
    ///
    /// Any user name the client put in the frame has already been dropped by
    /// decoding; the sender is always `user`.
    pub fn from_client(user: &Username, message: ClientMessage, ts: Timestamp) -> Self {
        let payload = match message {
            ClientMessage::Chat { text } => EventPayload::Chat { text },
            ClientMessage::ObjectMove {
                id,
                position,
                rotation,
            } => EventPayload::ObjectMove {
                id,
                position,
                rotation,
            },
            ClientMessage::Other { kind, text } => EventPayload::Other { kind, text },
        };
        Self {
            user: user.as_str().to_string(),
            payload,
            ts,
        }
    }

    /// Announcement that `user` joined `room`.
    pub fn join(user: &Username, room: &RoomName, ts: Timestamp) -> Self {
        Self {
            user: SYSTEM_USER.to_string(),
            payload: EventPayload::Join {
                text: format!("{user} joined room '{room}'"),
            },
            ts,
        }
    }

    /// Announcement that `user` left `room`.
    pub fn leave(user: &Username, room: &RoomName, ts: Timestamp) -> Self {
        Self {
            user: SYSTEM_USER.to_string(),
            payload: EventPayload::Leave {
                text: format!("{user} left room '{room}'"),
            },
            ts,
        }
    }

    /// Wire value of the `type` field.
    pub fn kind(&self) -> &str {
        match &self.payload {
            EventPayload::Chat { .. } => "chat",
            EventPayload::ObjectMove { .. } => "object_move",
            EventPayload::Join { .. } => "join",
            EventPayload::Leave { .. } => "leave",
            EventPayload::Other { kind, .. } => kind,
        }
    }
}
