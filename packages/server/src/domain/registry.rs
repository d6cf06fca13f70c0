//! Room registry abstraction.
//!
//! The use-case layer depends on this trait; the concrete implementation lives
//! in the infrastructure layer.

use async_trait::async_trait;

use super::{
    entity::{Member, MemberSnapshot, RoomSummary},
    value_object::{RoomName, SessionId},
};

/// Process-wide mapping from room name to its live members.
///
/// A room exists exactly while it has at least one member. The registry knows
/// nothing about event content: it moves already encoded frames.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Add `member` to `room`, creating the room if needed, and deliver
    /// `announcement` to every member including the newcomer.
    ///
    /// Registration and delivery are one step: no broadcast can reach the
    /// newcomer ahead of its announcement.
    async fn join(&self, room: &RoomName, member: Member, announcement: &str);

    /// Remove the member with `session_id` from `room`.
    ///
    /// Returns `false` (and changes nothing) when the room or member is
    /// absent. The room entry is dropped once its last member leaves.
    async fn leave(&self, room: &RoomName, session_id: SessionId) -> bool;

    /// Deliver `frame` to every member of `room` at the time of the call.
    ///
    /// Per-recipient failures are isolated and never returned.
    async fn broadcast(&self, room: &RoomName, frame: &str);

    /// Current members of `room` in join order (empty if the room is absent).
    async fn members(&self, room: &RoomName) -> Vec<MemberSnapshot>;

    /// All live rooms, sorted by name.
    async fn rooms(&self) -> Vec<RoomSummary>;
}
