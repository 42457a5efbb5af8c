//! Server assembly and run loop.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::RoomRegistry;
use crate::infrastructure::registry::InMemoryRoomRegistry;

use super::{handler, signal, state::AppState};

/// Listen address configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Build the application router around a shared state instance.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::http::health_check))
        .route("/api/rooms/{room_code}/users", get(handler::http::room_presence))
        .route("/api/rooms/{room_code}/clear", post(handler::http::clear_room))
        .route("/ws/{room_code}", get(handler::websocket::websocket_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the server until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), std::io::Error> {
    let registry: Arc<dyn RoomRegistry> = Arc::new(InMemoryRoomRegistry::new());
    let state = Arc::new(AppState::new(registry));
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
}
