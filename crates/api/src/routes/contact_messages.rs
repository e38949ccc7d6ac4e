//! Route definitions for the `/contact-messages` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::contact_message;
use crate::state::AppState;

/// Routes mounted at `/contact-messages`.
///
/// ```text
/// GET    /            -> list (admin)
/// POST   /            -> create (public)
/// DELETE /{id}        -> delete (admin)
/// PATCH  /{id}/read   -> mark_read (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(contact_message::list).post(contact_message::create),
        )
        .route("/{id}", delete(contact_message::delete))
        .route("/{id}/read", patch(contact_message::mark_read))
}
