//! About-section content model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// The single row of the `about_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub experience: String,
    pub expertise: String,
    pub thumbnails_created: String,
    pub happy_clients: String,
    pub updated_at: Timestamp,
}

/// DTO for saving the about content. Every field is required and replaces
/// the stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveAboutContent {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub experience: String,
    #[validate(length(min = 1))]
    pub expertise: String,
    #[validate(length(min = 1))]
    pub thumbnails_created: String,
    #[validate(length(min = 1))]
    pub happy_clients: String,
}
