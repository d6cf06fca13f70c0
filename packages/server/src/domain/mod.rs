//! Domain layer for the relay.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod registry;
pub mod value_object;

pub use entity::{Member, MemberSnapshot, Outbox, RoomSummary};
pub use error::FrameDecodeError;
pub use event::{ClientMessage, DEFAULT_OBJECT_ID, Event, EventPayload, Vector};
pub use registry::RoomRegistry;
pub use value_object::{
    DEFAULT_ROOM_NAME, DEFAULT_USERNAME, RoomName, SYSTEM_USER, SessionId, Timestamp, Username,
};
