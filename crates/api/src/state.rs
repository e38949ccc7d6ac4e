use std::sync::Arc;

use crate::config::ServerConfig;
use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request (inner data is behind `Arc`
/// or is already cheaply `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration, including the admin credential and JWT settings.
    pub config: Arc<ServerConfig>,
    /// Local storage for uploaded images.
    pub uploads: Arc<UploadStore>,
}
