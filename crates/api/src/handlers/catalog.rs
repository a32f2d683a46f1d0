//! Public catalog handlers: listing, detail, search, filter options and the
//! home-page carousels.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::catalog::{decade_buckets, YearRange};
use cinedex_core::error::CoreError;
use cinedex_core::roles::ROLE_ADMIN;
use cinedex_core::types::DbId;
use cinedex_db::models::lookup::NamedRef;
use cinedex_db::repositories::movie_repo::{FEATURED_LIMIT, TOP_RATED_LIMIT};
use cinedex_db::repositories::{LookupRepo, MovieRepo, ReviewRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{PathParams, QueryParams};
use crate::middleware::auth::AuthUser;
use crate::query::{MovieListQuery, SearchQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// Options for the browsing sidebar.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub years: Vec<YearRange>,
    pub genres: Vec<NamedRef>,
    pub awards: Vec<NamedRef>,
    pub countries: Vec<NamedRef>,
    pub availability: Vec<NamedRef>,
    pub status: Vec<NamedRef>,
}

#[derive(Debug, Serialize)]
pub struct ReviewedResponse {
    pub reviewed: bool,
}

/// GET /api/v1/movies/movie
///
/// One page of published movies. Invalid `yearRange` or `sort` values are
/// rejected before any query runs.
pub async fn list_movies(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<MovieListQuery>,
) -> AppResult<impl IntoResponse> {
    let (filter, window) = params.into_filter()?;
    let page = MovieRepo::list_filtered(&state.pool, &filter, window).await?;

    tracing::debug!(
        total_count = page.total_count,
        page = page.page,
        returned = page.movies.len(),
        "Movie listing served",
    );

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/movies/detail/{id}
pub async fn get_movie_detail(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = MovieRepo::find_published_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;

    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/movies/detail/review/{id}
///
/// Approved reviews of a movie. 404 when there are none.
pub async fn list_movie_reviews(
    State(state): State<AppState>,
    PathParams(movie_id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewRepo::list_approved_for_movie(&state.pool, movie_id).await?;
    if reviews.is_empty() {
        return Err(AppError::NotFound(format!(
            "No reviews found for movie {movie_id}"
        )));
    }

    Ok(Json(DataResponse { data: reviews }))
}

/// GET /api/v1/movies/{movie_id}/reviewed/{user_id}
///
/// Whether the user already reviewed the movie. Users may only ask about
/// themselves; admins may ask about anyone.
pub async fn has_reviewed(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParams((movie_id, user_id)): PathParams<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    if auth.user_id != user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot inspect another user's reviews".into(),
        )));
    }

    let reviewed = ReviewRepo::has_reviewed(&state.pool, movie_id, user_id).await?;
    Ok(Json(DataResponse {
        data: ReviewedResponse { reviewed },
    }))
}

/// GET /api/v1/search?q=
pub async fn search_movies(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let term = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Search query is required".into()))?;

    let movies = MovieRepo::search(&state.pool, term).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/filters
pub async fn filter_options(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let (bounds, genres, awards, countries, availability, status) = tokio::try_join!(
        MovieRepo::release_year_bounds(pool),
        LookupRepo::genre_names(pool),
        LookupRepo::award_names(pool),
        LookupRepo::country_names(pool),
        LookupRepo::platform_names(pool),
        LookupRepo::statuses(pool),
    )?;

    let years = bounds
        .map(|(min, max)| decade_buckets(min, max))
        .unwrap_or_default();

    Ok(Json(DataResponse {
        data: FilterOptions {
            years,
            genres,
            awards,
            countries,
            availability,
            status,
        },
    }))
}

/// GET /api/v1/top-rated
pub async fn top_rated(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::top_rated(&state.pool, TOP_RATED_LIMIT).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::featured(&state.pool, FEATURED_LIMIT).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/platforms
pub async fn list_platforms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let platforms = LookupRepo::platforms(&state.pool).await?;
    Ok(Json(DataResponse { data: platforms }))
}

/// GET /api/v1/status
pub async fn list_statuses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let statuses = LookupRepo::statuses(&state.pool).await?;
    Ok(Json(DataResponse { data: statuses }))
}
