//! HTTP API response DTOs for the relay.

use serde::{Deserialize, Serialize};

use crate::domain::RoomSummary;

/// Room summary for the list and detail endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub name: String,
    /// Member usernames in join order
    pub members: Vec<String>,
}

impl From<RoomSummary> for RoomSummaryDto {
    fn from(summary: RoomSummary) -> Self {
        Self {
            name: summary.name.into_string(),
            members: summary
                .members
                .into_iter()
                .map(|username| username.into_string())
                .collect(),
        }
    }
}
