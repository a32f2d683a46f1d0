//! Route definitions for public browsing.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Public catalog routes.
///
/// ```text
/// GET /movies/movie                          filtered, paginated listing
/// GET /movies/detail/{id}                    published movie with associations
/// GET /movies/detail/review/{id}             approved reviews of a movie
/// GET /movies/{movie_id}/reviewed/{user_id}  has the user reviewed it (auth)
/// GET /search?q=                             quick title search
/// GET /filters                               sidebar options
/// GET /top-rated                             top 15 by IMDb score
/// GET /featured                              top 10 from the latest year
/// GET /platforms                             availability lookup
/// GET /status                                release-status lookup
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies/movie", get(catalog::list_movies))
        .route("/movies/detail/{id}", get(catalog::get_movie_detail))
        .route("/movies/detail/review/{id}", get(catalog::list_movie_reviews))
        .route(
            "/movies/{movie_id}/reviewed/{user_id}",
            get(catalog::has_reviewed),
        )
        .route("/search", get(catalog::search_movies))
        .route("/filters", get(catalog::filter_options))
        .route("/top-rated", get(catalog::top_rated))
        .route("/featured", get(catalog::featured))
        .route("/platforms", get(catalog::list_platforms))
        .route("/status", get(catalog::list_statuses))
}
