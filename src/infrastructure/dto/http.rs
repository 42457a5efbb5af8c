//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Point-in-time presence snapshot for one room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPresenceDto {
    /// Normalized (uppercased) room code
    pub room_id: String,
    /// Number of currently-open connections in the room
    pub user_count: usize,
}

/// Response to an HTTP-triggered canvas clear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearRoomDto {
    pub message: String,
}
