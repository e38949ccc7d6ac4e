//! Shared response bodies for API handlers.
//!
//! Entities and lists are returned bare. Operations without an entity to
//! return (delete, mark-read) acknowledge with [`Ack`].

use serde::Serialize;

/// `{ "success": true, "message": ... }` acknowledgment.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

impl Ack {
    /// A successful acknowledgment carrying `message`.
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
