//! Route definitions for the admin dashboard and movie lifecycle.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, drama};
use crate::state::AppState;

/// Admin routes.
///
/// ```text
/// GET  /dashboard                        entity counts
/// GET  /movie-genre-count-by-decade      per-decade statistics
/// GET  /movie-list?status=               admin movie table
/// POST /add-drama                        submit a movie (any authenticated user)
/// PUT  /update-drama                     edit and publish a movie
/// PUT  /movie-delete/{id}                -> trashed
/// PUT  /movie-rejected/{id}              -> rejected
/// PUT  /movie-permanent-delete/{id}      -> permanently deleted
/// PUT  /movie-restore/{id}               -> published
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route(
            "/movie-genre-count-by-decade",
            get(admin::genre_count_by_decade),
        )
        .route("/movie-list", get(admin::list_movies))
        .route("/add-drama", post(drama::add_drama))
        .route("/update-drama", put(drama::update_drama))
        .route("/movie-delete/{id}", put(admin::trash_movie))
        .route("/movie-rejected/{id}", put(admin::reject_movie))
        .route("/movie-permanent-delete/{id}", put(admin::purge_movie))
        .route("/movie-restore/{id}", put(admin::restore_movie))
}
