//! Room-based WebSocket broadcast relay.
//!
//! Clients connect to `/ws/{room}/{username}`; every frame one client sends is
//! relayed to all members of the same room as a typed, timestamped event, and
//! the server announces joins and leaves.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::{ServerArgs, ServerConfig};
pub use error::ServerError;
pub use ui::run as run_server;
