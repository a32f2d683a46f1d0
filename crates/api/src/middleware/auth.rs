//! Session-token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use cinedex_core::error::CoreError;
use cinedex_core::status::AccountStatus;
use cinedex_core::types::DbId;
use cinedex_db::repositories::UserRepo;

use crate::auth::cookie::SESSION_COOKIE;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller.
///
/// The token is taken from `Authorization: Bearer <token>` when present,
/// otherwise from the HttpOnly session cookie set by `/login`. The account
/// is re-read on every request: suspended accounts get 403, deleted or
/// vanished accounts 401, and `role` is the current role rather than the
/// one signed into the token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (`"admin"` or `"user"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(AUTHORIZATION) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid Authorization format. Expected: Bearer <token>".into(),
                    ))
                })?,
            None => CookieJar::from_headers(&parts.headers)
                .get(SESSION_COOKIE)
                .map(|c| c.value().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized("Authentication required".into()))
                })?,
        };

        let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
            })?;

        match user.account_status() {
            AccountStatus::Active => Ok(AuthUser {
                user_id: user.id,
                role: user.role,
            }),
            AccountStatus::Suspended => Err(AppError::Core(CoreError::Forbidden(
                "Account Suspended".into(),
            ))),
            AccountStatus::Deleted => Err(AppError::Core(CoreError::Unauthorized(
                "Account no longer exists".into(),
            ))),
        }
    }
}
