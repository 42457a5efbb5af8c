//! UseCase: server-confirmed canvas clear.

use std::sync::Arc;

use crate::domain::{RoomCode, RoomRegistry};

/// Truncates a room's history. The caller broadcasts `clear_canvas` to every
/// member *including* the requester, so no replica discards state before the
/// server confirms it.
pub struct ClearCanvasUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl ClearCanvasUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Truncate the history. Clearing a room with no live state is a no-op.
    pub async fn execute(&self, code: &RoomCode) {
        self.registry.clear_history(code).await;
    }
}
