pub mod about_content;
pub mod admin;
pub mod contact_messages;
pub mod health;
pub mod projects;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/login                        login (public)
///
/// /projects                           list (public), upload (admin)
/// /projects/{id}                      get (public), soft delete (admin)
///
/// /contact-messages                   list (admin), submit (public)
/// /contact-messages/{id}              delete (admin)
/// /contact-messages/{id}/read         mark read (admin)
///
/// /about-content                      get (public), save (admin)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        // Admin login.
        .nest("/admin", admin::router())
        // Portfolio thumbnails and image upload.
        .nest("/projects", projects::router(config.max_upload_bytes))
        // Contact form inbox.
        .nest("/contact-messages", contact_messages::router())
        // About section.
        .nest("/about-content", about_content::router())
}
