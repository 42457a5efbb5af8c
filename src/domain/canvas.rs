//! Canvas surface capability.
//!
//! Rendering is external to the synchronization core. The core only produces
//! and replays operation records; the visual interpretation, including erase
//! geometry, belongs entirely to the adapter on each receiving client.

use super::entity::{Operation, StrokeSegment};

/// Capability implemented by the rendering layer.
pub trait CanvasSurface {
    /// Apply one stroke segment. The adapter decides how to interpret the
    /// segment's `tool` (brush paints, an eraser removes pixels).
    fn apply_segment(&mut self, segment: &StrokeSegment);

    /// Remove pixels in a radius around a point.
    fn erase_at(&mut self, x: f64, y: f64, radius: f64);

    /// Discard everything drawn so far.
    fn clear_all(&mut self);
}

/// Replay a history snapshot (the `existing_data` payload) onto a surface in
/// stored order, so a late joiner reaches the same visual state as members
/// who received the operations live.
pub fn replay<S: CanvasSurface>(history: &[Operation], surface: &mut S) {
    for op in history {
        match op {
            Operation::Draw { data } => surface.apply_segment(data),
            Operation::Clear => surface.clear_all(),
        }
    }
}
