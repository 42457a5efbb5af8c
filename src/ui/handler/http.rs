//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomCode,
    infrastructure::dto::{
        http::{ClearRoomDto, RoomPresenceDto},
        websocket::ServerMessage,
    },
    ui::{broadcast::broadcast, state::AppState},
    usecase::{ClearCanvasUseCase, PresenceUseCase},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Point-in-time presence snapshot for a room.
///
/// Callable with no open connection (initial page load) and re-queried by
/// members after `user_joined`/`user_left` signals. A room with no live
/// state reports zero, not an error.
pub async fn room_presence(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<RoomPresenceDto>, StatusCode> {
    let code = match RoomCode::new(room_code) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!("invalid room code in presence query: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let usecase = PresenceUseCase::new(state.registry.clone());
    let user_count = usecase.count(&code).await;

    Ok(Json(RoomPresenceDto {
        room_id: code.into_string(),
        user_count,
    }))
}

/// Clear a room's canvas over HTTP.
///
/// Truncates the history and broadcasts `clear_canvas` to every member.
/// Clearing a room with no live state succeeds as a no-op.
pub async fn clear_room(
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<Json<ClearRoomDto>, StatusCode> {
    let code = match RoomCode::new(room_code) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!("invalid room code in clear request: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let usecase = ClearCanvasUseCase::new(state.registry.clone());
    usecase.execute(&code).await;
    broadcast(state.registry.as_ref(), &code, &ServerMessage::ClearCanvas, None).await;
    tracing::info!("room {} cleared via HTTP", code);

    Ok(Json(ClearRoomDto {
        message: format!("Room {code} cleared successfully"),
    }))
}
