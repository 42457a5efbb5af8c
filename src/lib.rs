//! Room-scoped real-time whiteboard synchronization.
//!
//! Clients join named rooms over WebSocket and exchange drawing operations.
//! The server validates inbound operations, appends them to the room's
//! in-memory history, and fans them out to the other members of the room.
//! Late joiners receive a full-state snapshot so they deterministically reach
//! the same visual state as existing members.

pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, run as run_server};
