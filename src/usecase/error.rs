//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{ConnectionId, RoomCode, SegmentError};

/// Errors raised when registering a connection into a room
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The handle is already registered, an internal invariant violation
    #[error("connection {0} is already registered in the room")]
    AlreadyJoined(ConnectionId),
}

/// Errors raised when recording a stroke
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitStrokeError {
    /// The segment failed validation and is dropped
    #[error(transparent)]
    InvalidSegment(#[from] SegmentError),

    /// The sender's room vanished underneath it
    #[error("room {0} has no live state")]
    RoomNotFound(RoomCode),
}

/// Errors raised when unregistering a connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeaveError {
    /// The connection was not a member of the room
    #[error("connection {0} was not a member of the room")]
    NotAMember(ConnectionId),
}
