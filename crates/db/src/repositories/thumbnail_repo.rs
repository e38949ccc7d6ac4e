//! Repository for the `thumbnails` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::thumbnail::{CreateThumbnail, Thumbnail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, image_url, image_public_id, created_at, is_active";

/// Provides create, list, and soft-delete operations for thumbnails.
pub struct ThumbnailRepo;

impl ThumbnailRepo {
    /// List active thumbnails, most recently created first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Thumbnail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM thumbnails WHERE is_active = TRUE ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Thumbnail>(&query).fetch_all(pool).await
    }

    /// Find a thumbnail by id, whether or not it has been soft-deleted.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Thumbnail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM thumbnails WHERE id = $1");
        sqlx::query_as::<_, Thumbnail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new thumbnail, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateThumbnail) -> Result<Thumbnail, sqlx::Error> {
        let query = format!(
            "INSERT INTO thumbnails (title, description, image_url, image_public_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Thumbnail>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.image_public_id)
            .fetch_one(pool)
            .await
    }

    /// Soft-delete a thumbnail. Returns `true` if a row with `id` exists.
    ///
    /// Already-inactive rows are matched too, so repeating the call keeps
    /// returning `true`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE thumbnails SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
