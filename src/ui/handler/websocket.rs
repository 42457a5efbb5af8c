//! WebSocket connection handlers.
//!
//! One connection session per client: `Connecting -> Joined -> Closed`. The
//! room code comes from the connection target (`/ws/{room_code}`), not a
//! first-message negotiation. While joined, a blocking receive loop
//! dispatches on the decoded message tag; all failures stay contained to
//! this connection.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, RoomCode, RoomRegistry},
    infrastructure::dto::websocket::{ClientMessage, ServerMessage},
    ui::{broadcast::broadcast, state::AppState},
    usecase::{ClearCanvasUseCase, JoinRoomUseCase, LeaveRoomUseCase, SubmitStrokeUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(room_code): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    // Normalize the room code before lookup; "abc123" and "ABC123" are the
    // same room.
    let code = match RoomCode::new(room_code.clone()) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!("rejecting connection with invalid room code '{}': {}", room_code, e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, code)))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, room_code: RoomCode) {
    let conn_id = ConnectionId::new();
    let (mut sender, mut receiver) = socket.split();

    // Channel feeding this connection's writer task; broadcasts from other
    // sessions land here.
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let join_usecase = JoinRoomUseCase::new(state.registry.clone());
    let history = match join_usecase.execute(room_code.clone(), conn_id, tx).await {
        Ok(history) => history,
        Err(e) => {
            tracing::error!("failed to register {} in room {}: {}", conn_id, room_code, e);
            return;
        }
    };
    tracing::info!("connection {} joined room {}", conn_id, room_code);

    // Full-state snapshot: the late joiner replays this and reaches the same
    // visual state as existing members.
    let existing = serde_json::to_string(&ServerMessage::ExistingData { data: history })
        .expect("serialize existing_data");
    let snapshot_sent = match sender.send(Message::Text(existing.into())).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("failed to send existing_data to {}: {}", conn_id, e);
            false
        }
    };

    if snapshot_sent {
        // Signal only; every member re-queries the presence count itself.
        broadcast(
            state.registry.as_ref(),
            &room_code,
            &ServerMessage::UserJoined,
            Some(conn_id),
        )
        .await;

        // Writer: forward queued outbound messages to the socket
        let mut send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if sender.send(Message::Text(msg.into())).await.is_err() {
                    break;
                }
            }
        });

        // Reader: decode, dispatch, fan out
        let registry = state.registry.clone();
        let code = room_code.clone();
        let mut recv_task = tokio::spawn(async move {
            while let Some(msg) = receiver.next().await {
                let msg = match msg {
                    Ok(msg) => msg,
                    Err(e) => {
                        tracing::debug!("websocket error on {}: {}", conn_id, e);
                        break;
                    }
                };

                match msg {
                    Message::Text(text) => {
                        handle_text(&registry, &code, conn_id, &text).await;
                    }
                    Message::Close(_) => {
                        tracing::info!("connection {} requested close", conn_id);
                        break;
                    }
                    Message::Ping(_) | Message::Pong(_) => {
                        // Handled by the protocol layer
                    }
                    _ => {}
                }
            }
        });

        // If one task finishes, the connection is done either way
        tokio::select! {
            _ = &mut recv_task => send_task.abort(),
            _ = &mut send_task => recv_task.abort(),
        };
    }

    // Closed: unregister, tell the remaining members, let the registry drop
    // the room if it emptied. No further messages are processed.
    let leave_usecase = LeaveRoomUseCase::new(state.registry.clone());
    match leave_usecase.execute(&room_code, conn_id).await {
        Ok(()) => {
            broadcast(
                state.registry.as_ref(),
                &room_code,
                &ServerMessage::UserLeft,
                None,
            )
            .await;
            tracing::info!("connection {} left room {}", conn_id, room_code);
        }
        Err(e) => {
            tracing::warn!("failed to unregister {} from room {}: {}", conn_id, room_code, e);
        }
    }
}

/// Dispatch one inbound text frame. A malformed or invalid message is
/// dropped silently: it never terminates the session and produces no
/// broadcast.
async fn handle_text(
    registry: &Arc<dyn RoomRegistry>,
    code: &RoomCode,
    conn_id: ConnectionId,
    text: &str,
) {
    let msg = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::debug!("dropping malformed message from {}: {}", conn_id, e);
            return;
        }
    };

    match msg {
        ClientMessage::Draw { data } => {
            // The sender already applied the stroke locally; never echo it
            // back.
            let usecase = SubmitStrokeUseCase::new(registry.clone());
            match usecase.execute(code, data).await {
                Ok(segment) => {
                    broadcast(
                        registry.as_ref(),
                        code,
                        &ServerMessage::Draw { data: segment },
                        Some(conn_id),
                    )
                    .await;
                }
                Err(e) => {
                    tracing::debug!("dropping invalid stroke from {}: {}", conn_id, e);
                }
            }
        }
        ClientMessage::Clear => {
            // Destructive, so server-confirmed: the sender waits for the
            // broadcast like everyone else.
            let usecase = ClearCanvasUseCase::new(registry.clone());
            usecase.execute(code).await;
            broadcast(registry.as_ref(), code, &ServerMessage::ClearCanvas, None).await;
            tracing::info!("room {} cleared by {}", code, conn_id);
        }
    }
}
