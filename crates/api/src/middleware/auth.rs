//! JWT-based principal extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use ucsb_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated principal extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Every failure (missing header, wrong scheme, bad signature, expiry) is
/// rejected with 403 Forbidden, the same status as an insufficient role.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The principal's e-mail address (from `claims.sub`).
    pub email: String,
    /// Granted role names.
    pub roles: Vec<String>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| forbidden("Authentication required"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| forbidden("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            forbidden("Invalid or expired token")
        })?;

        Ok(AuthUser {
            email: claims.sub,
            roles: claims.roles,
        })
    }
}

fn forbidden(reason: &str) -> AppError {
    AppError::Core(CoreError::Forbidden(reason.into()))
}
