//! UseCase: register a connection into a room.

use std::sync::Arc;

use crate::common::time::now_millis;
use crate::domain::{ConnectionId, Operation, OutboundSender, RoomCode, RoomRegistry, Timestamp};

use super::error::JoinError;

/// Registers a connection handle into a room, creating the room lazily, and
/// returns the history snapshot the joining client replays.
pub struct JoinRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the join.
    ///
    /// # Returns
    ///
    /// The room's history at the moment of registration, in stored order.
    /// This becomes the payload of the `existing_data` message.
    pub async fn execute(
        &self,
        code: RoomCode,
        conn: ConnectionId,
        sender: OutboundSender,
    ) -> Result<Vec<Operation>, JoinError> {
        let joined_at = Timestamp::new(now_millis());
        self.registry
            .join(code, conn, sender, joined_at)
            .await
            .map_err(|_| JoinError::AlreadyJoined(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StrokeSegment;
    use crate::infrastructure::registry::InMemoryRoomRegistry;
    use tokio::sync::mpsc;

    fn code(s: &str) -> RoomCode {
        RoomCode::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_first_join_sees_empty_history() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = JoinRoomUseCase::new(registry.clone());
        let (tx, _rx) = mpsc::unbounded_channel();

        // when:
        let history = usecase
            .execute(code("ZT9K2A"), ConnectionId::new(), tx)
            .await
            .unwrap();

        // then:
        assert!(history.is_empty());
        assert_eq!(registry.member_count(&code("ZT9K2A")).await, 1);
    }

    #[tokio::test]
    async fn test_late_join_sees_stored_operations() {
        // given: an existing member and one stored draw
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = JoinRoomUseCase::new(registry.clone());
        let (tx1, _rx1) = mpsc::unbounded_channel();
        usecase
            .execute(code("ZT9K2A"), ConnectionId::new(), tx1)
            .await
            .unwrap();
        let op = Operation::Draw {
            data: StrokeSegment {
                from_x: 0.0,
                from_y: 0.0,
                to_x: 10.0,
                to_y: 10.0,
                color: "#000000".to_string(),
                size: 3,
                tool: "brush".to_string(),
                extra: serde_json::Map::new(),
            },
        };
        registry
            .append_operation(&code("ZT9K2A"), op.clone())
            .await
            .unwrap();

        // when:
        let (tx2, _rx2) = mpsc::unbounded_channel();
        let history = usecase
            .execute(code("ZT9K2A"), ConnectionId::new(), tx2)
            .await
            .unwrap();

        // then: same order, same payload values
        assert_eq!(history, vec![op]);
    }

    #[tokio::test]
    async fn test_duplicate_handle_is_rejected() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = JoinRoomUseCase::new(registry);
        let conn = ConnectionId::new();
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        usecase.execute(code("ZT9K2A"), conn, tx1).await.unwrap();

        // when:
        let result = usecase.execute(code("ZT9K2A"), conn, tx2).await;

        // then:
        assert_eq!(result, Err(JoinError::AlreadyJoined(conn)));
    }
}
