//! Route definitions for the `/projects` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::thumbnail;
use crate::state::AppState;

/// Room for multipart boundaries and the text fields on top of the file.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (multipart upload)
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
///
/// The body limit is raised just past `max_upload_bytes` so the handler can
/// report oversized files itself.
pub fn router(max_upload_bytes: u64) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(thumbnail::list)
                .post(thumbnail::create)
                .layer(DefaultBodyLimit::max(upload_body_limit(max_upload_bytes))),
        )
        .route("/{id}", get(thumbnail::get_by_id).delete(thumbnail::delete))
}

/// Request body limit for uploads, clamped to what the platform can address.
fn upload_body_limit(max_upload_bytes: u64) -> usize {
    let limit = max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);
    usize::try_from(limit).unwrap_or(usize::MAX)
}
