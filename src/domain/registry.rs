//! Room registry abstraction.
//!
//! The registry owns the process-wide mapping from room code to live room
//! state (history plus member handles). The UI layer depends on this trait
//! rather than a concrete store (dependency inversion); the in-memory
//! implementation lives in the infrastructure layer.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{
    entity::Operation,
    error::RegistryError,
    value_object::{ConnectionId, RoomCode, Timestamp},
};

/// Channel end used to deliver outbound messages to one member's writer task
pub type OutboundSender = mpsc::UnboundedSender<String>;

/// Snapshot of one member's delivery handle
#[derive(Debug, Clone)]
pub struct MemberHandle {
    pub id: ConnectionId,
    pub sender: OutboundSender,
}

/// Process-wide room table.
///
/// All mutations of a given room's history and member set serialize through
/// the implementation, and snapshot reads observe a consistent point-in-time
/// view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Register a member, lazily creating the room on first join.
    ///
    /// Returns a snapshot of the room's history taken at the moment of
    /// registration, for the `existing_data` replay message.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::HandleAlreadyRegistered`] if the handle is
    /// already a member, an invariant violation contained to this
    /// connection.
    async fn join(
        &self,
        code: RoomCode,
        conn: ConnectionId,
        sender: OutboundSender,
        joined_at: Timestamp,
    ) -> Result<Vec<Operation>, RegistryError>;

    /// Unregister a member, dropping the room when it becomes empty.
    async fn leave(&self, code: &RoomCode, conn: ConnectionId) -> Result<(), RegistryError>;

    /// Append an operation to the room's history in arrival order.
    async fn append_operation(&self, code: &RoomCode, op: Operation)
    -> Result<(), RegistryError>;

    /// Truncate the room's history to empty. A no-op for unknown rooms.
    async fn clear_history(&self, code: &RoomCode);

    /// Point-in-time copy of the room's history. Empty for unknown rooms.
    async fn history_snapshot(&self, code: &RoomCode) -> Vec<Operation>;

    /// Snapshot of the member handles, optionally excluding one connection.
    async fn members(&self, code: &RoomCode, exclude: Option<ConnectionId>) -> Vec<MemberHandle>;

    /// Current member count. Zero (not an error) for unknown rooms.
    async fn member_count(&self, code: &RoomCode) -> usize;
}
