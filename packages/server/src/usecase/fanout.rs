//! Event encoding + registry fanout shared by the use cases.

use crate::{
    domain::{Event, RoomName, RoomRegistry},
    infrastructure::dto::websocket::encode_event,
};

/// Encode `event` for the wire, logging (and dropping) it on failure.
pub(super) fn encode_for_room(room: &RoomName, event: &Event) -> Option<String> {
    match encode_event(event) {
        Ok(frame) => Some(frame),
        Err(e) => {
            tracing::error!(
                "Failed to encode '{}' event for room '{}': {}",
                event.kind(),
                room,
                e
            );
            None
        }
    }
}

/// Encode `event` once and hand the frame to the registry for `room`.
pub(super) async fn broadcast_event(registry: &dyn RoomRegistry, room: &RoomName, event: &Event) {
    if let Some(frame) = encode_for_room(room, event) {
        registry.broadcast(room, &frame).await;
    }
}
