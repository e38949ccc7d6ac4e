//! Repository for the single-row `about_content` table.

use sqlx::PgPool;

use crate::models::about_content::{AboutContent, SaveAboutContent};

/// Column list for `about_content` queries. `slot` is internal.
const COLUMNS: &str = "id, title, description, experience, expertise, \
                       thumbnails_created, happy_clients, updated_at";

/// Provides read and upsert operations for the about content.
pub struct AboutContentRepo;

impl AboutContentRepo {
    /// Fetch the about content. Returns `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content WHERE slot = 1");
        sqlx::query_as::<_, AboutContent>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create the about content if absent, otherwise replace every field.
    ///
    /// Uses `ON CONFLICT (slot) DO UPDATE` so concurrent first writes cannot
    /// produce a second row. The row id survives updates and `updated_at`
    /// always moves strictly forward.
    pub async fn upsert(
        pool: &PgPool,
        input: &SaveAboutContent,
    ) -> Result<AboutContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_content \
                (title, description, experience, expertise, thumbnails_created, happy_clients) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (slot) DO UPDATE \
             SET title = EXCLUDED.title, \
                 description = EXCLUDED.description, \
                 experience = EXCLUDED.experience, \
                 expertise = EXCLUDED.expertise, \
                 thumbnails_created = EXCLUDED.thumbnails_created, \
                 happy_clients = EXCLUDED.happy_clients, \
                 updated_at = GREATEST( \
                     clock_timestamp(), \
                     about_content.updated_at + INTERVAL '1 microsecond' \
                 ) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.experience)
            .bind(&input.expertise)
            .bind(&input.thumbnails_created)
            .bind(&input.happy_clients)
            .fetch_one(pool)
            .await
    }
}
