//! Handlers for the `/awards` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::award::AwardInput;
use cinedex_db::repositories::AwardRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::handlers::{country_id_by_name, required};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/awards
pub async fn list_awards(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let awards = AwardRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: awards }))
}

/// POST /api/v1/awards
pub async fn create_award(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<AwardInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    required(&input.awards_name, "Award name")?;
    let country_id = country_id_by_name(&state, &input.country_name).await?;

    let award = AwardRepo::create(&state.pool, &input, country_id).await?;
    tracing::info!(award_id = award.id, user_id = admin.user_id, "Award created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: award })))
}

/// PUT /api/v1/awards/{id}
pub async fn update_award(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<AwardInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    required(&input.awards_name, "Award name")?;
    let country_id = country_id_by_name(&state, &input.country_name).await?;

    let award = AwardRepo::update(&state.pool, id, &input, country_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Award", id }))?;
    tracing::info!(award_id = id, user_id = admin.user_id, "Award updated");

    Ok(Json(DataResponse { data: award }))
}

/// DELETE /api/v1/awards/{id}
///
/// Soft delete.
pub async fn delete_award(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AwardRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Award", id }));
    }
    tracing::info!(award_id = id, user_id = admin.user_id, "Award soft-deleted");

    Ok(Json(DataResponse::ack("Award deleted")))
}
