//! Handlers for the `/projects` resource (portfolio thumbnails).

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::upload::{validate_content_type, validate_size};
use folio_db::models::thumbnail::{CreateThumbnail, Thumbnail};
use folio_db::repositories::ThumbnailRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::parse_id;
use crate::middleware::auth::AdminUser;
use crate::response::Ack;
use crate::state::AppState;

const ENTITY: &str = "Thumbnail";

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// Fallback name when the client sends no filename.
const DEFAULT_UPLOAD_NAME: &str = "upload";

/// GET /api/projects
///
/// Active thumbnails, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Thumbnail>>> {
    let thumbnails = ThumbnailRepo::list_active(&state.pool).await?;
    Ok(Json(thumbnails))
}

/// GET /api/projects/{id}
///
/// Deleted thumbnails are reported as not found.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Thumbnail>> {
    let id = parse_id(ENTITY, &id)?;
    let thumbnail = ThumbnailRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|t| t.is_active)
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(thumbnail))
}

/// POST /api/projects
///
/// Accepts `multipart/form-data` with exactly one image file in the `image`
/// field plus optional `title` and `description` text fields. The file is
/// checked for type and size while it streams in, written to the upload
/// directory, and recorded as a new active thumbnail.
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Thumbnail>)> {
    let max = state.config.max_upload_bytes;
    let mut image: Option<(String, Vec<u8>)> = None;
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            IMAGE_FIELD => {
                if image.is_some() {
                    return Err(AppError::Core(CoreError::Validation(
                        "Only one image file may be uploaded per request".into(),
                    )));
                }
                image = Some(read_image(field, max).await?);
            }
            "title" => title = non_empty(read_text(field, max).await?),
            "description" => description = non_empty(read_text(field, max).await?),
            _ => {} // ignore unknown fields
        }
    }

    let (original_name, data) = image.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Image file is required".into()))
    })?;

    let stored = state.uploads.save(&original_name, &data).await?;

    let input = CreateThumbnail {
        title,
        description,
        image_url: stored.url.clone(),
        image_public_id: Some(stored.file_name.clone()),
    };
    input.validate()?;

    match ThumbnailRepo::create(&state.pool, &input).await {
        Ok(thumbnail) => {
            tracing::info!(
                thumbnail_id = %thumbnail.id,
                file = %stored.file_name,
                bytes = data.len(),
                "Thumbnail uploaded"
            );
            Ok((StatusCode::CREATED, Json(thumbnail)))
        }
        Err(e) => {
            state.uploads.remove(&stored.file_name).await;
            Err(e.into())
        }
    }
}

/// DELETE /api/projects/{id}
///
/// Soft delete: the row is kept but no longer listed.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let id = parse_id(ENTITY, &id)?;
    if ThumbnailRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(thumbnail_id = %id, "Thumbnail deleted");
        Ok(Json(Ack::ok("Project deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

/// Read the image field, rejecting non-image types before any bytes are
/// buffered and stopping as soon as the size limit is crossed.
async fn read_image(mut field: Field<'_>, max: u64) -> AppResult<(String, Vec<u8>)> {
    validate_content_type(field.content_type())?;

    let original_name = field
        .file_name()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_UPLOAD_NAME)
        .to_string();

    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, max))? {
        validate_size((data.len() + chunk.len()) as u64, max)?;
        data.extend_from_slice(&chunk);
    }

    if data.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Image file is empty".into(),
        )));
    }

    Ok((original_name, data))
}

async fn read_text(field: Field<'_>, max: u64) -> AppResult<String> {
    field.text().await.map_err(|e| multipart_error(e, max))
}

/// Body-limit rejections become `FileTooLarge`; any other parse failure is a
/// malformed request.
fn multipart_error(err: MultipartError, max: u64) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Core(CoreError::FileTooLarge { max })
    } else {
        AppError::Core(CoreError::Validation(err.body_text()))
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
