//! Server-level error definitions.

use thiserror::Error;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening address could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
