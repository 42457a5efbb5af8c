//! Domain layer for the whiteboard synchronization core.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod canvas;
pub mod entity;
pub mod error;
pub mod registry;
pub mod value_object;

pub use canvas::{CanvasSurface, replay};
pub use entity::{Operation, Room, StrokeSegment};
pub use error::{RegistryError, SegmentError, ValueObjectError};
pub use registry::{MemberHandle, OutboundSender, RoomRegistry};
pub use value_object::{ConnectionId, RoomCode, Timestamp};

#[cfg(test)]
pub use registry::MockRoomRegistry;
