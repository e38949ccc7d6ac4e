//! Contact message entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub created_at: Timestamp,
    pub is_read: bool,
}

/// DTO for a contact form submission.
///
/// There is no `is_read` field: new messages are always unread,
/// and any such key in the request body is ignored. `email` is free text
/// as typed into the form; only presence is checked.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessage {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub project_type: String,
    #[validate(length(min = 1))]
    pub message: String,
}
