//! Handlers for the `/genres` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::genre::GenreInput;
use cinedex_db::repositories::GenreRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::handlers::required;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/genres
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// POST /api/v1/genres
pub async fn create_genre(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GenreInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let name = required(&input.name, "Genre name")?;

    let genre = GenreRepo::create(&state.pool, name).await?;
    tracing::info!(genre_id = genre.id, user_id = admin.user_id, "Genre created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: genre })))
}

/// PUT /api/v1/genres/update/{id}
pub async fn update_genre(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<GenreInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let name = required(&input.name, "Genre name")?;

    let genre = GenreRepo::rename(&state.pool, id, name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    tracing::info!(genre_id = id, user_id = admin.user_id, "Genre renamed");

    Ok(Json(DataResponse { data: genre }))
}

/// PUT /api/v1/genres/delete/{id}
///
/// Soft delete; movies keep their existing links to the genre.
pub async fn delete_genre(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    if !GenreRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }));
    }
    tracing::info!(genre_id = id, user_id = admin.user_id, "Genre soft-deleted");

    Ok(Json(DataResponse::ack("Genre deleted")))
}
