//! Handlers for the `/about-content` resource.

use axum::extract::State;
use axum::Json;
use folio_db::models::about_content::{AboutContent, SaveAboutContent};
use folio_db::repositories::AboutContentRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// GET /api/about-content
///
/// Returns `null` until the admin saves the content for the first time.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Option<AboutContent>>> {
    let content = AboutContentRepo::get(&state.pool).await?;
    Ok(Json(content))
}

/// POST /api/about-content
///
/// Create or replace the about content.
pub async fn save(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(input): ValidatedJson<SaveAboutContent>,
) -> AppResult<Json<AboutContent>> {
    let content = AboutContentRepo::upsert(&state.pool, &input).await?;
    tracing::info!(updated_at = %content.updated_at, "About content saved");
    Ok(Json(content))
}
