//! In-memory room registry.
//!
//! Concrete implementation of the domain's `RoomRegistry` trait, keeping the
//! whole room table in a `HashMap` behind one async mutex. The single lock
//! serializes history and membership mutation per room and makes every
//! snapshot a consistent point-in-time read. State lives only for the
//! process lifetime; when the last member leaves a room its history is gone.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, MemberHandle, Operation, OutboundSender, RegistryError, Room, RoomCode,
    RoomRegistry, Timestamp,
};

/// One live room: the domain entity plus the delivery handle per member
struct RoomEntry {
    room: Room,
    members: HashMap<ConnectionId, OutboundSender>,
}

/// Process-wide in-memory room table
#[derive(Default)]
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<RoomCode, RoomEntry>>,
}

impl InMemoryRoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn join(
        &self,
        code: RoomCode,
        conn: ConnectionId,
        sender: OutboundSender,
        joined_at: Timestamp,
    ) -> Result<Vec<Operation>, RegistryError> {
        let mut rooms = self.rooms.lock().await;
        let entry = rooms.entry(code.clone()).or_insert_with(|| RoomEntry {
            room: Room::new(code.clone(), joined_at),
            members: HashMap::new(),
        });
        if entry.members.contains_key(&conn) {
            return Err(RegistryError::HandleAlreadyRegistered { room: code, conn });
        }
        entry.members.insert(conn, sender);
        Ok(entry.room.history().to_vec())
    }

    async fn leave(&self, code: &RoomCode, conn: ConnectionId) -> Result<(), RegistryError> {
        let mut rooms = self.rooms.lock().await;
        let Some(entry) = rooms.get_mut(code) else {
            return Err(RegistryError::RoomNotFound(code.clone()));
        };
        if entry.members.remove(&conn).is_none() {
            return Err(RegistryError::MemberNotFound {
                room: code.clone(),
                conn,
            });
        }
        // history dies with the last member
        if entry.members.is_empty() {
            rooms.remove(code);
        }
        Ok(())
    }

    async fn append_operation(
        &self,
        code: &RoomCode,
        op: Operation,
    ) -> Result<(), RegistryError> {
        let mut rooms = self.rooms.lock().await;
        let Some(entry) = rooms.get_mut(code) else {
            return Err(RegistryError::RoomNotFound(code.clone()));
        };
        entry.room.append(op);
        Ok(())
    }

    async fn clear_history(&self, code: &RoomCode) {
        let mut rooms = self.rooms.lock().await;
        if let Some(entry) = rooms.get_mut(code) {
            entry.room.clear();
        }
    }

    async fn history_snapshot(&self, code: &RoomCode) -> Vec<Operation> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(code)
            .map(|entry| entry.room.history().to_vec())
            .unwrap_or_default()
    }

    async fn members(&self, code: &RoomCode, exclude: Option<ConnectionId>) -> Vec<MemberHandle> {
        let rooms = self.rooms.lock().await;
        let Some(entry) = rooms.get(code) else {
            return Vec::new();
        };
        entry
            .members
            .iter()
            .filter(|(id, _)| exclude != Some(**id))
            .map(|(id, sender)| MemberHandle {
                id: *id,
                sender: sender.clone(),
            })
            .collect()
    }

    async fn member_count(&self, code: &RoomCode) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.get(code).map(|entry| entry.members.len()).unwrap_or(0)
    }
}
