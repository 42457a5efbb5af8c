//! UseCase: unregister a connection from its room.

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomCode, RoomRegistry};

use super::error::LeaveError;

/// Removes a connection handle from its room; the registry drops the room
/// when the last member leaves. The caller broadcasts `user_left` to the
/// remaining members afterwards.
pub struct LeaveRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl LeaveRoomUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, code: &RoomCode, conn: ConnectionId) -> Result<(), LeaveError> {
        self.registry
            .leave(code, conn)
            .await
            .map_err(|_| LeaveError::NotAMember(conn))
    }
}
