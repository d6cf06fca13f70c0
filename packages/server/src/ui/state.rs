//! Shared application state.

use std::sync::Arc;

use crate::{domain::RoomRegistry, infrastructure::registry::InMemoryRoomRegistry};

/// Shared application state
pub struct AppState {
    /// Registry（ルームとメンバーの対応表）
    pub registry: Arc<dyn RoomRegistry>,
}

impl AppState {
    /// Create state around an existing registry
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Create state backed by a fresh in-memory registry
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self::new(Arc::new(InMemoryRoomRegistry::new())))
    }
}
