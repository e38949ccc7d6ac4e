//! Integration tests for the single-row about content.

use folio_db::models::about_content::SaveAboutContent;
use folio_db::repositories::AboutContentRepo;
use sqlx::PgPool;

fn content(title: &str, clients: &str) -> SaveAboutContent {
    SaveAboutContent {
        title: title.to_string(),
        description: "Thumbnail designer for creators.".to_string(),
        experience: "5+ years".to_string(),
        expertise: "YouTube, Twitch".to_string(),
        thumbnails_created: "1200+".to_string(),
        happy_clients: clients.to_string(),
    }
}

async fn row_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about_content")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

#[sqlx::test(migrations = "./migrations")]
async fn get_returns_none_before_first_save(pool: PgPool) {
    assert!(AboutContentRepo::get(&pool).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn first_upsert_inserts(pool: PgPool) {
    let saved = AboutContentRepo::upsert(&pool, &content("About me", "300+"))
        .await
        .unwrap();

    let fetched = AboutContentRepo::get(&pool).await.unwrap().unwrap();
    assert_eq!(fetched.id, saved.id);
    assert_eq!(fetched.title, "About me");
    assert_eq!(row_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn second_upsert_updates_in_place(pool: PgPool) {
    let first = AboutContentRepo::upsert(&pool, &content("First", "10"))
        .await
        .unwrap();
    let second = AboutContentRepo::upsert(&pool, &content("Second", "20"))
        .await
        .unwrap();

    assert_eq!(row_count(&pool).await, 1);
    assert_eq!(second.id, first.id, "the row id must survive updates");
    assert_eq!(second.title, "Second");
    assert_eq!(second.happy_clients, "20");
    assert!(
        second.updated_at > first.updated_at,
        "updated_at must strictly increase"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_first_writes_leave_one_row(pool: PgPool) {
    let a = content("A", "1");
    let b = content("B", "2");

    let (ra, rb) = tokio::join!(
        AboutContentRepo::upsert(&pool, &a),
        AboutContentRepo::upsert(&pool, &b),
    );
    ra.unwrap();
    rb.unwrap();

    assert_eq!(row_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn schema_rejects_a_second_row(pool: PgPool) {
    AboutContentRepo::upsert(&pool, &content("Only", "1")).await.unwrap();

    let result = sqlx::query(
        "INSERT INTO about_content \
            (slot, title, description, experience, expertise, thumbnails_created, happy_clients) \
         VALUES (2, 't', 'd', 'e', 'x', 'n', 'c')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "only slot 1 is allowed");
}
