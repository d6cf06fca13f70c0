//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Room name used when the connection path carries none (or only whitespace).
pub const DEFAULT_ROOM_NAME: &str = "lobby";

/// Username used when the connection path carries none (or only whitespace).
pub const DEFAULT_USERNAME: &str = "Anon";

/// Display name attached to server-generated join/leave events.
pub const SYSTEM_USER: &str = "SYSTEM";

/// Room name value object.
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    /// Normalise a raw path segment into a room name.
    ///
    /// Leading and trailing whitespace is removed; an absent or blank value
    /// becomes [`DEFAULT_ROOM_NAME`].
    pub fn normalize(raw: Option<&str>) -> Self {
        Self(trimmed_or(raw, DEFAULT_ROOM_NAME))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a connected client.
///
/// Always trimmed and never empty. Not unique: two sessions may share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Normalise a raw path segment into a username.
    ///
    /// Leading and trailing whitespace is removed; an absent or blank value
    /// becomes [`DEFAULT_USERNAME`].
    pub fn normalize(raw: Option<&str>) -> Self {
        Self(trimmed_or(raw, DEFAULT_USERNAME))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn trimmed_or(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Opaque identifier of one WebSocket session.
///
/// Membership removal is keyed by this token, so two sessions using the same
/// username in the same room stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// ISO-8601 UTC string with second precision and a trailing `Z`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(String);

impl Timestamp {
    /// The current instant.
    pub fn now() -> Self {
        Self(hiroba_shared::time::utc_now_iso8601())
    }

    /// Wrap an already formatted timestamp.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
