//! Liveness/readiness probe for the portfolio backend.
//!
//! Mounted at the root (`/health`), outside `/api`, so load balancers can hit
//! it without going through the JSON API prefix.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// `"ok"` when every dependency answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Postgres answered `SELECT 1`.
    pub db_healthy: bool,
    /// The upload directory exists, so new thumbnails can be stored and
    /// existing ones served.
    pub uploads_ready: bool,
}

impl HealthReport {
    fn new(db_healthy: bool, uploads_ready: bool) -> Self {
        Self {
            status: if db_healthy && uploads_ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            uploads_ready,
        }
    }
}

/// GET /health
///
/// Always answers 200; the body says which dependency is failing.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let (db, uploads_ready) = tokio::join!(
        folio_db::health_check(&state.pool),
        state.uploads.is_ready(),
    );

    if let Err(e) = &db {
        tracing::warn!(error = %e, "Health check: database unreachable");
    }
    if !uploads_ready {
        tracing::warn!(dir = %state.uploads.dir().display(), "Health check: upload directory missing");
    }

    Json(HealthReport::new(db.is_ok(), uploads_ready))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_only_when_everything_is_up() {
        assert_eq!(HealthReport::new(true, true).status, "ok");
        assert_eq!(HealthReport::new(false, true).status, "degraded");
        assert_eq!(HealthReport::new(true, false).status, "degraded");
    }
}
