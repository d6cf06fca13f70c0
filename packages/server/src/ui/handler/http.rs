//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomName,
    infrastructure::dto::http::RoomSummaryDto,
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of live rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.registry.rooms().await;
    Json(rooms.into_iter().map(RoomSummaryDto::from).collect())
}

/// Get one live room by name
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Json<RoomSummaryDto>, StatusCode> {
    let room = RoomName::normalize(Some(room.as_str()));
    let members = state.registry.members(&room).await;

    // rooms without members do not exist
    if members.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(RoomSummaryDto {
        name: room.into_string(),
        members: members
            .into_iter()
            .map(|m| m.username.into_string())
            .collect(),
    }))
}
