//! Room registry implementations.
//!
//! Concrete implementations of the domain-level `RoomRegistry` trait. The
//! use-case layer depends on the trait, never on these types directly.

pub mod inmemory;

pub use inmemory::InMemoryRoomRegistry;
