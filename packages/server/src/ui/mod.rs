//! WebSocket relay server: router, handlers and runner.

mod handler;
mod runner;
mod signal;
pub mod state; // UseCase 層・テストからアクセスするため public

pub use runner::{build_router, run, serve};
pub use signal::shutdown_signal;
