//! Router construction and server runner.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::ServerConfig, error::ServerError};

use super::{
    handler::{
        get_room_detail, get_rooms, health_check, websocket_default_handler, websocket_handler,
        websocket_room_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_default_handler))
        .route("/ws/{room}", get(websocket_room_handler))
        .route("/ws/{room}/{username}", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room}", get(get_room_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl+C / SIGTERM.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be bound, or
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    match listener.local_addr() {
        Ok(local) => tracing::info!("Listening on {}", local),
        Err(_) => tracing::info!("Listening on {}", addr),
    }

    serve(listener, AppState::in_memory(), shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the accept loop fails.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
