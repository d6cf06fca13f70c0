//! WebSocket message DTOs for the relay.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    ClientMessage, DEFAULT_OBJECT_ID, Event, EventPayload, FrameDecodeError, Vector,
};

/// Inbound frame as sent by a client. Every field is optional.
///
/// Unknown fields (including a client-supplied `user`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundFrame {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<String>,
    pub id: Option<String>,
    pub position: Option<Vector>,
    pub rotation: Option<Vector>,
}

impl InboundFrame {
    /// Structured decode of a text frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameDecodeError`] if the frame is not a JSON object or a
    /// known field has the wrong JSON type.
    pub fn parse(raw: &str) -> Result<Self, FrameDecodeError> {
        // A known field with the wrong JSON type (`{"type": 5}`, a numeric
        // object_move `id`) fails here: the whole frame is then relayed as
        // chat text instead of being classified by its `type`.
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(FrameDecodeError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Classify the frame and apply per-kind defaults.
    pub fn into_message(self) -> ClientMessage {
        match self.kind.as_deref().unwrap_or("chat") {
            "chat" => ClientMessage::Chat {
                text: self.text.unwrap_or_default(),
            },
            "object_move" => ClientMessage::ObjectMove {
                id: self.id.unwrap_or_else(|| DEFAULT_OBJECT_ID.to_string()),
                position: self.position.unwrap_or_default(),
                rotation: self.rotation.unwrap_or_default(),
            },
            other => ClientMessage::Other {
                text: self.text.unwrap_or_else(|| format!("Event {other}")),
                kind: other.to_string(),
            },
        }
    }
}

/// Decode a text frame into a [`ClientMessage`].
///
/// Two stages: structured decode first; if that fails the whole raw frame
/// becomes chat text. Never fails.
pub fn decode_frame(raw: &str) -> ClientMessage {
    match InboundFrame::parse(raw) {
        Ok(frame) => frame.into_message(),
        Err(e) => {
            tracing::debug!("Frame is not a message object ({}), relaying as chat", e);
            ClientMessage::raw_chat(raw)
        }
    }
}

/// Outbound event as sent to every room member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundEvent {
    pub r#type: String,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vector>,
    pub ts: String,
}

impl From<&Event> for OutboundEvent {
    fn from(event: &Event) -> Self {
        let mut dto = Self {
            r#type: event.kind().to_string(),
            user: event.user.clone(),
            text: None,
            id: None,
            position: None,
            rotation: None,
            ts: event.ts.as_str().to_string(),
        };
        match &event.payload {
            EventPayload::Chat { text }
            | EventPayload::Join { text }
            | EventPayload::Leave { text }
            | EventPayload::Other { text, .. } => dto.text = Some(text.clone()),
            EventPayload::ObjectMove {
                id,
                position,
                rotation,
            } => {
                dto.id = Some(id.clone());
                dto.position = Some(position.clone());
                dto.rotation = Some(rotation.clone());
            }
        }
        dto
    }
}

/// Encode an event as a JSON text frame.
pub fn encode_event(event: &Event) -> Result<String, serde_json::Error> {
    serde_json::to_string(&OutboundEvent::from(event))
}
