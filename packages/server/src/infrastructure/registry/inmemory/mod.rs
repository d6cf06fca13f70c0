//! In-memory registry backed by a single mutex-guarded map.

mod room;

pub use room::InMemoryRoomRegistry;
