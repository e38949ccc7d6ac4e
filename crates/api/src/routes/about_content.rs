//! Route definitions for the `/about-content` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::about_content;
use crate::state::AppState;

/// Routes mounted at `/about-content`.
///
/// ```text
/// GET  /   -> get
/// POST /   -> save (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(about_content::get).post(about_content::save))
}
