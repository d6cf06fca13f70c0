//! In-memory room registry.
//!
//! One `tokio::sync::Mutex` guards the whole room map. `join`, `leave` and the
//! snapshot phase of `broadcast` take it; the per-member sends of `broadcast`
//! run after it is released. Outboxes are unbounded, so the join announcement
//! is queued while the lock is still held.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Member, MemberSnapshot, Outbox, RoomName, RoomRegistry, RoomSummary, SessionId,
};

/// In-memory implementation of [`RoomRegistry`].
///
/// Invariant: every key maps to a non-empty member list.
#[derive(Default)]
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<RoomName, Vec<Member>>>,
}

impl InMemoryRoomRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn join(&self, room: &RoomName, member: Member, announcement: &str) {
        let mut rooms = self.rooms.lock().await;
        tracing::debug!(
            "Registering session {} ('{}') in room '{}'",
            member.session_id,
            member.username,
            room
        );
        let members = rooms.entry(room.clone()).or_default();
        members.push(member);

        for m in members.iter() {
            if m.outbox.send(announcement.to_string()).is_err() {
                tracing::warn!(
                    "Failed to deliver to session {} in room '{}'",
                    m.session_id,
                    room
                );
            }
        }
    }

    async fn leave(&self, room: &RoomName, session_id: SessionId) -> bool {
        let mut rooms = self.rooms.lock().await;
        let Some(members) = rooms.get_mut(room) else {
            return false;
        };

        let before = members.len();
        members.retain(|m| m.session_id != session_id);
        let removed = members.len() != before;

        if members.is_empty() {
            rooms.remove(room);
            tracing::debug!("Room '{}' is empty and was removed", room);
        }
        removed
    }

    async fn broadcast(&self, room: &RoomName, frame: &str) {
        let recipients: Vec<(SessionId, Outbox)> = {
            let rooms = self.rooms.lock().await;
            match rooms.get(room) {
                Some(members) => members
                    .iter()
                    .map(|m| (m.session_id, m.outbox.clone()))
                    .collect(),
                None => return,
            }
        };

        for (session_id, outbox) in recipients {
            if outbox.send(frame.to_string()).is_err() {
                tracing::warn!(
                    "Failed to deliver to session {} in room '{}'",
                    session_id,
                    room
                );
            }
        }
    }

    async fn members(&self, room: &RoomName) -> Vec<MemberSnapshot> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room)
            .map(|members| members.iter().map(Member::snapshot).collect())
            .unwrap_or_default()
    }

    async fn rooms(&self) -> Vec<RoomSummary> {
        let rooms = self.rooms.lock().await;
        let mut summaries: Vec<RoomSummary> = rooms
            .iter()
            .map(|(name, members)| RoomSummary {
                name: name.clone(),
                members: members.iter().map(|m| m.username.clone()).collect(),
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}
