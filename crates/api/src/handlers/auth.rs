//! Handlers for account registration, email confirmation, login/logout and
//! password recovery.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use cinedex_core::error::CoreError;
use cinedex_core::roles::ROLE_USER;
use cinedex_core::status::AccountStatus;
use cinedex_db::models::user::{CreateUser, User, UserResponse};
use cinedex_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::cookie::{removal_cookie, session_cookie};
use crate::auth::jwt::{
    generate_access_token, generate_link_token, matches_password, validate_link_token,
    LinkPurpose, CONFIRM_EMAIL_EXPIRY_MINS, RESET_PASSWORD_EXPIRY_MINS,
};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::notifications::OutgoingMail;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,
    #[validate(email(message = "Email address is invalid"))]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /forgot-password`.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Request body for `POST /reset-password/{token}`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Successful login. The same token is also set as the session cookie.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/register
///
/// Creates an unconfirmed account and mails the confirmation link.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let username = input.username.trim();
    let email = input.email.trim();
    if UserRepo::username_or_email_taken(&state.pool, username, email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Username or email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            role: ROLE_USER.to_string(),
            profile_picture: None,
            email_confirmed: false,
        },
    )
    .await?;

    let token = generate_link_token(
        user.id,
        LinkPurpose::ConfirmEmail,
        None,
        CONFIRM_EMAIL_EXPIRY_MINS,
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let link = format!("{}/confirm-email/{token}", state.config.public_base_url);
    state
        .mailer
        .send(OutgoingMail::confirmation(&user.email, &user.username, &link));

    tracing::info!(user_id = user.id, "User registered, confirmation mailed");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// GET /api/v1/confirm-email/{token}
pub async fn confirm_email(
    State(state): State<AppState>,
    PathParams(token): PathParams<String>,
) -> AppResult<impl IntoResponse> {
    let claims = validate_link_token(&token, LinkPurpose::ConfirmEmail, &state.config.jwt)
        .ok_or_else(|| AppError::BadRequest("Invalid or expired confirmation link".into()))?;

    if !UserRepo::confirm_email(&state.pool, claims.sub).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: claims.sub,
        }));
    }
    tracing::info!(user_id = claims.sub, "Email confirmed");

    Ok(Json(DataResponse::ack("Email confirmed")))
}

/// POST /api/v1/login
///
/// Authenticate by email + password. Returns the session token and sets it
/// as an HttpOnly cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<(CookieJar, Json<DataResponse<LoginResponse>>)> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    ensure_not_suspended(&user)?;
    if user.account_status() == AccountStatus::Deleted {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }
    if !user.email_confirmed {
        return Err(AppError::Core(CoreError::Forbidden(
            "Email address has not been confirmed".into(),
        )));
    }
    let password_hash = password_hash_of(&user)?;

    let password_valid = verify_password(&input.password, password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let jwt = &state.config.jwt;
    let token = generate_access_token(user.id, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    let jar = jar.add(session_cookie(
        token.clone(),
        jwt.access_token_expiry_mins,
        state.config.cookie_secure,
    ));
    Ok((
        jar,
        Json(DataResponse {
            data: LoginResponse {
                token,
                expires_in: jwt.access_token_expiry_mins * 60,
                user: UserResponse::from(&user),
            },
        }),
    ))
}

/// POST /api/v1/logout
///
/// Clears the session cookie. Bearer tokens simply expire.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(removal_cookie()), Json(DataResponse::ack("Logged out")))
}

/// POST /api/v1/forgot-password
///
/// Mails a short-lived reset link bound to the current password hash.
pub async fn forgot_password(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ForgotPasswordRequest>,
) -> AppResult<impl IntoResponse> {
    let email = input.email.trim();
    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .filter(|u| u.account_status() != AccountStatus::Deleted)
        .ok_or_else(|| AppError::NotFound("No account registered with this email".into()))?;

    ensure_not_suspended(&user)?;
    let password_hash = password_hash_of(&user)?;

    let token = generate_link_token(
        user.id,
        LinkPurpose::ResetPassword,
        Some(password_hash),
        RESET_PASSWORD_EXPIRY_MINS,
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let link = format!("{}/reset-password/{token}", state.config.public_base_url);
    state
        .mailer
        .send(OutgoingMail::password_reset(&user.email, &link));

    tracing::info!(user_id = user.id, "Password reset link mailed");

    Ok(Json(DataResponse::ack("Password reset link sent")))
}

/// POST /api/v1/reset-password/{token}
///
/// A link stops working once the password it was issued against changes.
pub async fn reset_password(
    State(state): State<AppState>,
    PathParams(token): PathParams<String>,
    JsonBody(input): JsonBody<ResetPasswordRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid = || AppError::BadRequest("Invalid or expired reset link".into());

    let claims = validate_link_token(&token, LinkPurpose::ResetPassword, &state.config.jwt)
        .ok_or_else(invalid)?;
    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(invalid)?;
    if !matches_password(&claims, user.password_hash.as_deref()) {
        return Err(AppError::BadRequest(
            "Reset link has already been used".into(),
        ));
    }

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, user.id, &password_hash).await?;
    tracing::info!(user_id = user.id, "Password reset");

    Ok(Json(DataResponse::ack("Password has been reset")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_not_suspended(user: &User) -> Result<(), AppError> {
    if user.account_status() == AccountStatus::Suspended {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account Suspended".into(),
        )));
    }
    Ok(())
}

/// Stored hash, or 400 for accounts that only sign in through Google.
fn password_hash_of(user: &User) -> Result<&str, AppError> {
    user.password_hash.as_deref().ok_or_else(|| {
        AppError::BadRequest("This account signs in with Google; no password is set".into())
    })
}
