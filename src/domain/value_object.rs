//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Maximum length of a room code in characters
pub const MAX_ROOM_CODE_LEN: usize = 16;

/// Room code value object.
///
/// A short alphanumeric identifier addressing one room. Codes are normalized
/// to uppercase on construction, so `"abc123"` and `"ABC123"` name the same
/// room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    /// Create a new RoomCode, validating and case-normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty, longer than
    /// [`MAX_ROOM_CODE_LEN`] characters, or contains a non-alphanumeric
    /// character.
    pub fn new(code: impl Into<String>) -> Result<Self, ValueObjectError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValueObjectError::RoomCodeEmpty);
        }
        let len = code.len();
        if len > MAX_ROOM_CODE_LEN {
            return Err(ValueObjectError::RoomCodeTooLong {
                max: MAX_ROOM_CODE_LEN,
                actual: len,
            });
        }
        if let Some(ch) = code.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(ValueObjectError::RoomCodeInvalidChar { ch });
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection handle identity.
///
/// One per live client connection, generated server-side on accept. Clients
/// never see or choose this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh connection identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
