//! Broadcast dispatcher.
//!
//! Best-effort fan-out of one message to the current members of a room,
//! optionally excluding the originator. Delivery goes through each member's
//! unbounded channel, so a slow recipient never blocks the sender; a failed
//! send is logged and skipped, and the failed recipient cleans itself up via
//! its own disconnect path.

use crate::domain::{ConnectionId, RoomCode, RoomRegistry};
use crate::infrastructure::dto::websocket::ServerMessage;

/// Deliver `message` to every member of the room except `exclude`.
///
/// Iterates a snapshot of the member set; per-recipient failures are
/// isolated and never abort the loop.
pub async fn broadcast(
    registry: &dyn RoomRegistry,
    code: &RoomCode,
    message: &ServerMessage,
    exclude: Option<ConnectionId>,
) {
    let payload = serde_json::to_string(message).expect("serialize server message");
    for member in registry.members(code, exclude).await {
        if member.sender.send(payload.clone()).is_err() {
            // recipient is mid-disconnect; its own cleanup removes it
            tracing::warn!("failed to deliver message to {} in room {}", member.id, code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;
    use crate::infrastructure::registry::InMemoryRoomRegistry;
    use tokio::sync::mpsc;

    fn code(s: &str) -> RoomCode {
        RoomCode::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_broadcast_excludes_originator() {
        // given: two members in a room
        let registry = InMemoryRoomRegistry::new();
        let origin = ConnectionId::new();
        let other = ConnectionId::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry
            .join(code("X1"), origin, tx1, Timestamp::new(0))
            .await
            .unwrap();
        registry
            .join(code("X1"), other, tx2, Timestamp::new(0))
            .await
            .unwrap();

        // when:
        broadcast(&registry, &code("X1"), &ServerMessage::UserJoined, Some(origin)).await;

        // then: only the other member received it
        let delivered = rx2.try_recv().unwrap();
        assert!(delivered.contains("user_joined"));
        assert!(rx1.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_without_exclusion_reaches_everyone() {
        // given:
        let registry = InMemoryRoomRegistry::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry
            .join(code("X1"), ConnectionId::new(), tx1, Timestamp::new(0))
            .await
            .unwrap();
        registry
            .join(code("X1"), ConnectionId::new(), tx2, Timestamp::new(0))
            .await
            .unwrap();

        // when: a clear is confirmed to all members, sender included
        broadcast(&registry, &code("X1"), &ServerMessage::ClearCanvas, None).await;

        // then:
        assert!(rx1.try_recv().unwrap().contains("clear_canvas"));
        assert!(rx2.try_recv().unwrap().contains("clear_canvas"));
    }

    #[tokio::test]
    async fn test_failed_recipient_does_not_abort_the_fanout() {
        // given: one member whose receiver is already gone
        let registry = InMemoryRoomRegistry::new();
        let (tx1, rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry
            .join(code("X1"), ConnectionId::new(), tx1, Timestamp::new(0))
            .await
            .unwrap();
        registry
            .join(code("X1"), ConnectionId::new(), tx2, Timestamp::new(0))
            .await
            .unwrap();
        drop(rx1);

        // when:
        broadcast(&registry, &code("X1"), &ServerMessage::ClearCanvas, None).await;

        // then: the healthy member still received the message
        assert!(rx2.try_recv().unwrap().contains("clear_canvas"));
    }

    #[tokio::test]
    async fn test_broadcast_to_unknown_room_is_noop() {
        // given:
        let registry = InMemoryRoomRegistry::new();

        // when/then: nothing to deliver, no error
        broadcast(&registry, &code("NOPE"), &ServerMessage::ClearCanvas, None).await;
    }
}
