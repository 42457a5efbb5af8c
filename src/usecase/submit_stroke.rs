//! UseCase: record a stroke segment.

use std::sync::Arc;

use crate::domain::{Operation, RoomCode, RoomRegistry, StrokeSegment};

use super::error::SubmitStrokeError;

/// Validates an inbound stroke and appends it to the room's history. The
/// caller broadcasts the returned segment to the other members; the sender
/// already applied it locally and is never echoed.
pub struct SubmitStrokeUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl SubmitStrokeUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(
        &self,
        code: &RoomCode,
        segment: StrokeSegment,
    ) -> Result<StrokeSegment, SubmitStrokeError> {
        segment.validate()?;
        self.registry
            .append_operation(
                code,
                Operation::Draw {
                    data: segment.clone(),
                },
            )
            .await
            .map_err(|_| SubmitStrokeError::RoomNotFound(code.clone()))?;
        Ok(segment)
    }
}
