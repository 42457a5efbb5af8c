//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{ConnectionId, RoomCode};

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomCode validation error
    #[error("room code cannot be empty")]
    RoomCodeEmpty,

    /// RoomCode too long error
    #[error("room code cannot exceed {max} characters (got {actual})")]
    RoomCodeTooLong { max: usize, actual: usize },

    /// RoomCode character set error
    #[error("room code must be alphanumeric (got '{ch}')")]
    RoomCodeInvalidChar { ch: char },
}

/// Errors related to stroke segment validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A coordinate is NaN or infinite
    #[error("coordinate '{field}' is not finite")]
    NonFiniteCoordinate { field: &'static str },

    /// Stroke size must be at least one
    #[error("stroke size must be positive")]
    ZeroSize,
}

/// Errors raised by the room registry.
///
/// `HandleAlreadyRegistered` indicates an invariant violation (one handle
/// registered twice) and is not expected in normal operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The room has no live state
    #[error("room {0} has no live state")]
    RoomNotFound(RoomCode),

    /// Double registration of one connection handle
    #[error("connection {conn} is already a member of room {room}")]
    HandleAlreadyRegistered { room: RoomCode, conn: ConnectionId },

    /// The connection is not a member of the room
    #[error("connection {conn} is not a member of room {room}")]
    MemberNotFound { room: RoomCode, conn: ConnectionId },
}
