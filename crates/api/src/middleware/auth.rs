//! JWT-based admin extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::roles::ROLE_ADMIN;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated admin, extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Add it as a parameter to any handler that mutates content or exposes
/// private data:
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(admin = %admin.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The token must carry the admin role and be issued to the currently
/// configured admin email, so changing `ADMIN_EMAIL` invalidates old tokens.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Email the token was issued to.
    pub email: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        if claims.role != ROLE_ADMIN || claims.sub != state.config.admin.email {
            return Err(unauthorized("Token is not valid for the admin account"));
        }

        Ok(AdminUser { email: claims.sub })
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}
