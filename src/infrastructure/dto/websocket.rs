//! WebSocket message DTOs for the whiteboard protocol.
//!
//! JSON envelopes tagged by a `type` field. Inbound and outbound `draw`
//! payloads share one shape; the server forwards them unchanged.

use serde::{Deserialize, Serialize};

use crate::domain::{Operation, StrokeSegment};

/// Message received from a client while joined to a room
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// One stroke segment to store and fan out
    Draw { data: StrokeSegment },
    /// Request a server-confirmed wholesale canvas reset
    Clear,
}

/// Message sent to clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A stroke from another member, payload unchanged
    Draw { data: StrokeSegment },
    /// Confirmed canvas reset, delivered to every member including the sender
    ClearCanvas,
    /// Full-state snapshot sent once to a joining client
    ExistingData { data: Vec<Operation> },
    /// Membership change signal, no payload: recipients re-query presence
    UserJoined,
    /// Membership change signal, no payload: recipients re-query presence
    UserLeft,
}
