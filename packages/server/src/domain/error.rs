//! Domain layer error definitions.

use thiserror::Error;

/// Errors raised while decoding an inbound frame into a structured message.
///
/// Never surfaced to a client: every variant is recovered by treating the
/// raw frame as chat text.
#[derive(Debug, Error)]
pub enum FrameDecodeError {
    /// The frame is not valid JSON, or a known field has the wrong JSON type
    #[error("frame is not a valid message object: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The frame is valid JSON but not an object (e.g. `42` or `[1, 2]`)
    #[error("frame is JSON but not an object")]
    NotAnObject,
}
