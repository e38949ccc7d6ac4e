//! Handlers for the `/admin` resource.

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::roles::ROLE_ADMIN;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    /// Bearer token for the admin-only routes.
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/login
///
/// Check the submitted pair against the configured admin credential and
/// issue an access token on success.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Argon2 verification is CPU-bound; keep it off the async workers.
    let admin = state.config.admin.clone();
    let LoginRequest { email, password } = input;
    let authenticated =
        tokio::task::spawn_blocking(move || admin.authenticate(&email, &password))
            .await
            .map_err(|e| AppError::InternalError(format!("Login task failed: {e}")))?
            .map_err(|e| AppError::InternalError(format!("Admin password check failed: {e}")))?;

    if !authenticated {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let config = &state.config;
    let token = generate_access_token(&config.admin.email, ROLE_ADMIN, &config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(admin = %config.admin.email, "Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        token,
        expires_in: config.jwt.expiry_secs(),
    }))
}
