//! Handlers for the `/actors` resource. The birth country is given by name.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::actor::ActorInput;
use cinedex_db::repositories::ActorRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::handlers::{country_id_by_name, required};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/actors
pub async fn list_actors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: actors }))
}

/// POST /api/v1/actors
pub async fn create_actor(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ActorInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    required(&input.name, "Actor name")?;
    let country_id = country_id_by_name(&state, &input.country_name).await?;

    let actor = ActorRepo::create(&state.pool, &input, country_id).await?;
    tracing::info!(actor_id = actor.id, user_id = admin.user_id, "Actor created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: actor })))
}

/// PUT /api/v1/actors/{id}
pub async fn update_actor(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<ActorInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    required(&input.name, "Actor name")?;
    let country_id = country_id_by_name(&state, &input.country_name).await?;

    let actor = ActorRepo::update(&state.pool, id, &input, country_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    tracing::info!(actor_id = id, user_id = admin.user_id, "Actor updated");

    Ok(Json(DataResponse { data: actor }))
}

/// PUT /api/v1/actors/delete/{id}
pub async fn delete_actor(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ActorRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Actor", id }));
    }
    tracing::info!(actor_id = id, user_id = admin.user_id, "Actor soft-deleted");

    Ok(Json(DataResponse::ack("Actor deleted")))
}
