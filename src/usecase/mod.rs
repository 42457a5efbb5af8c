//! UseCase layer.
//!
//! Business logic invoked by the UI layer. Each usecase operates on the room
//! registry abstraction and returns the data the caller needs to perform its
//! own sends.

pub mod clear_canvas;
pub mod error;
pub mod join_room;
pub mod leave_room;
pub mod presence;
pub mod submit_stroke;

pub use clear_canvas::ClearCanvasUseCase;
pub use error::{JoinError, LeaveError, SubmitStrokeError};
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use presence::PresenceUseCase;
pub use submit_stroke::SubmitStrokeUseCase;
