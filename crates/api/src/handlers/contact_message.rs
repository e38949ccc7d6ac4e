//! Handlers for the `/contact-messages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::contact::is_known_project_type;
use folio_core::error::CoreError;
use folio_db::models::contact_message::{ContactMessage, CreateContactMessage};
use folio_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, ValidatedJson};
use crate::middleware::auth::AdminUser;
use crate::response::Ack;
use crate::state::AppState;

const ENTITY: &str = "ContactMessage";

/// GET /api/contact-messages
///
/// All messages, newest first. Admin only.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// POST /api/contact-messages
///
/// Public contact form submission. The stored message is always unread.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    if !is_known_project_type(&input.project_type) {
        tracing::debug!(project_type = %input.project_type, "Contact message with unlisted project type");
    }

    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = %message.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(message)))
}

/// PATCH /api/contact-messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let id = parse_id(ENTITY, &id)?;
    if ContactMessageRepo::mark_read(&state.pool, id).await? {
        Ok(Json(Ack::ok("Message marked as read")))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}

/// DELETE /api/contact-messages/{id}
///
/// Permanently removes the message.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let id = parse_id(ENTITY, &id)?;
    if ContactMessageRepo::delete(&state.pool, id).await? {
        tracing::info!(message_id = %id, "Contact message deleted");
        Ok(Json(Ack::ok("Message deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
