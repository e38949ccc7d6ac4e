//! Repository for the `contact_messages` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_message::{ContactMessage, CreateContactMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, project_type, message, created_at, is_read";

/// Provides CRUD operations for contact messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// List all messages, most recently received first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC");
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a message by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages WHERE id = $1");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new message. `is_read` is always stored as `false`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, project_type, message, is_read)
             VALUES ($1, $2, $3, $4, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.project_type)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Mark a message as read. Returns `true` if a row with `id` exists.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a message. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
