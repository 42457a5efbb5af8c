//! WebSocket whiteboard server implementation.

pub mod broadcast;
pub mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{ServerConfig, router, run};
