//! Core domain models for the relay.

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use super::value_object::{RoomName, SessionId, Username};

/// Outbound queue of one connection. Each item is one encoded text frame.
pub type Outbox = UnboundedSender<String>;

/// A single connection's participation in a room.
///
/// Identity is the [`SessionId`]; the username is only a display label.
#[derive(Debug, Clone)]
pub struct Member {
    /// Session identifier (removal key)
    pub session_id: SessionId,
    /// Display name
    pub username: Username,
    /// Outbound queue drained by the connection's writer task
    pub outbox: Outbox,
}

impl Member {
    /// Create a new member
    pub fn new(session_id: SessionId, username: Username, outbox: Outbox) -> Self {
        Self {
            session_id,
            username,
            outbox,
        }
    }

    /// Read-only view of this member without its outbound queue
    pub fn snapshot(&self) -> MemberSnapshot {
        MemberSnapshot {
            session_id: self.session_id,
            username: self.username.clone(),
        }
    }
}

/// Read-only view of a member, safe to hand out of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSnapshot {
    pub session_id: SessionId,
    pub username: Username,
}

/// Read-only view of a live room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub name: RoomName,
    /// Member usernames in join order
    pub members: Vec<Username>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_member_snapshot_drops_outbox() {
        // テスト項目: スナップショットはセッション ID とユーザー名を保持する
        // given (前提条件):
        let (tx, _rx) = mpsc::unbounded_channel();
        let session_id = SessionId::generate();
        let member = Member::new(session_id, Username::normalize(Some("alice")), tx);

        // when (操作):
        let snapshot = member.snapshot();

        // then (期待する結果):
        assert_eq!(snapshot.session_id, session_id);
        assert_eq!(snapshot.username.as_str(), "alice");
    }
}
