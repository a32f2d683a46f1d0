//! Handlers for user administration.
//!
//! All handlers require the `admin` role via [`RequireAdmin`]. Deleting a
//! user only flips `status_account`; rows are never removed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::roles::{is_valid_role, ROLE_USER};
use cinedex_core::status::AccountStatus;
use cinedex_core::types::DbId;
use cinedex_db::models::user::{CreateUser, UpdateUser, UserResponse};
use cinedex_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,
    #[validate(email(message = "Email address is invalid"))]
    pub email: String,
    pub password: String,
    /// Defaults to `user`.
    pub role: Option<String>,
    pub profile_picture: Option<String>,
}

/// Request body for `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Email address is invalid"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub profile_picture: Option<String>,
    /// New plaintext password; re-hashed before storage.
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_visible(&state.pool).await?;
    let data: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/users
///
/// Admin-created accounts are confirmed and active immediately.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let role = input.role.unwrap_or_else(|| ROLE_USER.to_string());
    ensure_valid_role(&role)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let username = input.username.trim();
    let email = input.email.trim();
    if UserRepo::username_or_email_taken(&state.pool, username, email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Username or email already exists".into(),
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
            role,
            profile_picture: input.profile_picture,
            email_confirmed: true,
        },
    )
    .await?;

    tracing::info!(
        created_user_id = user.id,
        user_id = admin.user_id,
        role = %user.role,
        "User created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<UpdateUserRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(role) = input.role.as_deref() {
        ensure_valid_role(role)?;
    }

    let password_hash = match input.password.as_deref() {
        Some(password) => {
            validate_password_strength(password, MIN_PASSWORD_LENGTH)
                .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
            Some(
                hash_password(password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
            )
        }
        None => None,
    };

    let update = UpdateUser {
        username: input.username.map(|u| u.trim().to_string()),
        email: input.email.map(|e| e.trim().to_string()),
        role: input.role,
        profile_picture: input.profile_picture,
        password_hash,
    };

    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(
        updated_user_id = id,
        user_id = admin.user_id,
        password_changed = update.password_hash.is_some(),
        "User updated",
    );

    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    admin: RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    set_account_status(admin, &state, id, AccountStatus::Deleted).await
}

/// PUT /api/v1/users/suspend/{id}
pub async fn suspend_user(
    admin: RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    set_account_status(admin, &state, id, AccountStatus::Suspended).await
}

/// PUT /api/v1/users/unlock/{id}
pub async fn unlock_user(
    admin: RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    set_account_status(admin, &state, id, AccountStatus::Active).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn set_account_status(
    RequireAdmin(admin): RequireAdmin,
    state: &AppState,
    id: DbId,
    status: AccountStatus,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if !UserRepo::set_account_status(&state.pool, id, status).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(
        target_user_id = id,
        user_id = admin.user_id,
        status_account = status.as_i16(),
        "Account status changed",
    );

    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

fn ensure_valid_role(role: &str) -> Result<(), AppError> {
    if is_valid_role(role) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role '{role}'"
        ))))
    }
}
