//! Shared response body types for API handlers.
//!
//! Records are returned as bare JSON; confirmations use [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` body used by delete confirmations and errors.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
