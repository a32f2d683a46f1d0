//! Admin dashboard handlers: statistics, the movie table and publication
//! status transitions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::status::MovieStatus;
use cinedex_core::types::DbId;
use cinedex_db::repositories::{DashboardRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{PathParams, QueryParams};
use crate::middleware::rbac::RequireAdmin;
use crate::query::AdminMovieListQuery;
use crate::response::{Ack, DataResponse};
use crate::state::AppState;

/// GET /api/v1/dashboard
pub async fn dashboard(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}

/// GET /api/v1/movie-genre-count-by-decade
pub async fn genre_count_by_decade(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = DashboardRepo::decade_stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/movie-list?status=
pub async fn list_movies(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<AdminMovieListQuery>,
) -> AppResult<impl IntoResponse> {
    let status = params.status()?;
    let movies = MovieRepo::list_admin(&state.pool, status).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// PUT /api/v1/movie-delete/{id}
pub async fn trash_movie(
    admin: RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(admin, &state, id, MovieStatus::Trashed).await
}

/// PUT /api/v1/movie-rejected/{id}
pub async fn reject_movie(
    admin: RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(admin, &state, id, MovieStatus::Rejected).await
}

/// PUT /api/v1/movie-permanent-delete/{id}
pub async fn purge_movie(
    admin: RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(admin, &state, id, MovieStatus::PermanentlyDeleted).await
}

/// PUT /api/v1/movie-restore/{id}
pub async fn restore_movie(
    admin: RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(admin, &state, id, MovieStatus::Published).await
}

async fn transition(
    RequireAdmin(admin): RequireAdmin,
    state: &AppState,
    movie_id: DbId,
    status: MovieStatus,
) -> AppResult<Json<DataResponse<Ack>>> {
    if !MovieRepo::set_status(&state.pool, movie_id, status).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    tracing::info!(
        movie_id,
        status = status.as_i16(),
        user_id = admin.user_id,
        "Movie status changed",
    );

    Ok(Json(DataResponse::ack("Movie status updated")))
}
