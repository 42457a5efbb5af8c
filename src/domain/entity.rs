//! Core domain models for the whiteboard synchronization core.

use serde::{Deserialize, Serialize};

use super::{
    error::SegmentError,
    value_object::{RoomCode, Timestamp},
};

/// One line segment drawn between two points.
///
/// Field names follow the wire format (camelCase). The numeric fields are
/// validated server-side; `color`, `tool` and any unknown extra fields ride
/// through untouched, so new tool kinds (e.g. an eraser) need no server
/// change; the receiving client's canvas adapter interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeSegment {
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    pub color: String,
    pub size: u32,
    pub tool: String,
    /// Unknown fields preserved verbatim for opaque forwarding
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StrokeSegment {
    /// Validate the numeric fields of the segment.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite or the size is zero.
    pub fn validate(&self) -> Result<(), SegmentError> {
        for (field, value) in [
            ("fromX", self.from_x),
            ("fromY", self.from_y),
            ("toX", self.to_x),
            ("toY", self.to_y),
        ] {
            if !value.is_finite() {
                return Err(SegmentError::NonFiniteCoordinate { field });
            }
        }
        if self.size == 0 {
            return Err(SegmentError::ZeroSize);
        }
        Ok(())
    }
}

/// A single persisted drawing action, the atomic unit of replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    /// A stroke segment, stored and replayed uninterpreted
    Draw { data: StrokeSegment },
    /// Wholesale canvas reset
    Clear,
}

/// Represents a drawing room with its accumulated operation history.
///
/// `history` is append-only for the room's lifetime, except wholesale
/// truncation by a clear. Membership is tracked by the registry next to the
/// room entity, not on the entity itself.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room identifier
    pub code: RoomCode,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
    history: Vec<Operation>,
}

impl Room {
    /// Create a new room with an empty history
    pub fn new(code: RoomCode, created_at: Timestamp) -> Self {
        Self {
            code,
            created_at,
            history: Vec::new(),
        }
    }

    /// Append an operation to the history in arrival order
    pub fn append(&mut self, op: Operation) {
        self.history.push(op);
    }

    /// Truncate the history to empty
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// The accumulated operations in stored order
    pub fn history(&self) -> &[Operation] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(from_x: f64, size: u32) -> StrokeSegment {
        StrokeSegment {
            from_x,
            from_y: 0.0,
            to_x: 10.0,
            to_y: 10.0,
            color: "#000000".to_string(),
            size,
            tool: "brush".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_segment_validate_success() {
        // given:
        let seg = segment(0.0, 3);

        // then:
        assert!(seg.validate().is_ok());
    }

    #[test]
    fn test_segment_validate_non_finite_coordinate() {
        // given:
        let seg = segment(f64::NAN, 3);

        // when:
        let result = seg.validate();

        // then:
        assert_eq!(
            result.unwrap_err(),
            crate::domain::SegmentError::NonFiniteCoordinate { field: "fromX" }
        );
    }

    #[test]
    fn test_segment_validate_zero_size() {
        // given:
        let seg = segment(0.0, 0);

        // when:
        let result = seg.validate();

        // then:
        assert_eq!(result.unwrap_err(), crate::domain::SegmentError::ZeroSize);
    }

    #[test]
    fn test_segment_preserves_unknown_fields() {
        // given: a draw payload with a field this server does not know about
        let json = r##"{"fromX":0.0,"fromY":0.0,"toX":1.0,"toY":1.0,"color":"#fff","size":2,"tool":"eraser","radius":12.5}"##;

        // when:
        let seg: StrokeSegment = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&seg).unwrap();

        // then: the unknown field survives the round trip
        assert_eq!(seg.tool, "eraser");
        assert_eq!(out["radius"], 12.5);
    }

    #[test]
    fn test_operation_wire_shape() {
        // given:
        let draw = Operation::Draw {
            data: segment(0.0, 3),
        };
        let clear = Operation::Clear;

        // when:
        let draw_json = serde_json::to_value(&draw).unwrap();
        let clear_json = serde_json::to_value(&clear).unwrap();

        // then:
        assert_eq!(draw_json["type"], "draw");
        assert_eq!(draw_json["data"]["fromX"], 0.0);
        assert_eq!(clear_json["type"], "clear");
    }

    #[test]
    fn test_room_history_append_order() {
        // given:
        let mut room = Room::new(RoomCode::new("ZT9K2A").unwrap(), Timestamp::new(0));

        // when:
        room.append(Operation::Draw {
            data: segment(1.0, 3),
        });
        room.append(Operation::Draw {
            data: segment(2.0, 3),
        });

        // then: stored order is arrival order
        assert_eq!(room.history().len(), 2);
        match &room.history()[0] {
            Operation::Draw { data } => assert_eq!(data.from_x, 1.0),
            other => panic!("unexpected operation: {other:?}"),
        }
    }

    #[test]
    fn test_room_clear_truncates_history() {
        // given:
        let mut room = Room::new(RoomCode::new("ZT9K2A").unwrap(), Timestamp::new(0));
        room.append(Operation::Draw {
            data: segment(1.0, 3),
        });

        // when:
        room.clear();

        // then:
        assert!(room.history().is_empty());
    }
}
