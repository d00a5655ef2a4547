//! API response envelopes
//!
//! Every non-entity body the service emits is one of two shapes: an error
//! carrying a single `error` message, or a confirmation carrying a single
//! `message`. Entity responses (listings) serialize directly.

use serde::{Deserialize, Serialize};

/// Error envelope: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message, safe to show to callers
    pub error: String,
}

impl ErrorBody {
    /// Create an error envelope
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Confirmation envelope: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Human-readable confirmation message
    pub message: String,
}

impl Confirmation {
    /// Create a confirmation envelope
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
