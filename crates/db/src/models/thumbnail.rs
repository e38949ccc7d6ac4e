//! Thumbnail entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `thumbnails` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Root-relative URL the image is served from.
    pub image_url: String,
    /// Stored filename backing `image_url`.
    pub image_public_id: Option<String>,
    pub created_at: Timestamp,
    /// `false` once the thumbnail has been deleted by the admin.
    pub is_active: bool,
}

/// DTO for creating a thumbnail. `is_active` always starts `true`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateThumbnail {
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "imageUrl must not be empty"))]
    pub image_url: String,
    pub image_public_id: Option<String>,
}
