//! UseCase: presence counting.

use std::sync::Arc;

use crate::domain::{RoomCode, RoomRegistry};

/// Reports the live member count of a room.
///
/// Queried both by members refreshing after a `user_joined`/`user_left`
/// signal and by external callers with no open connection (initial page
/// load). The count is read straight off the live member set, with no caching.
pub struct PresenceUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl PresenceUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Current member count; zero (not an error) for rooms with no live state.
    pub async fn count(&self, code: &RoomCode) -> usize {
        self.registry.member_count(code).await
    }
}
