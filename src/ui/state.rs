//! Shared server state.

use std::sync::Arc;

use crate::domain::RoomRegistry;

/// Shared application state.
///
/// The room registry is injected here rather than living in a module-level
/// singleton, so every server (and every test) owns its own room table.
pub struct AppState {
    pub registry: Arc<dyn RoomRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }
}
