use axum::routing::{get, put};
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Routes mounted at `/genres`.
///
/// ```text
/// GET  /               list (public)
/// POST /               create
/// PUT  /update/{id}    rename
/// PUT  /delete/{id}    soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genres::list_genres).post(genres::create_genre))
        .route("/update/{id}", put(genres::update_genre))
        .route("/delete/{id}", put(genres::delete_genre))
}
