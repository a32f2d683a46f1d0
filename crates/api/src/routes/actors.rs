use axum::routing::{get, put};
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET  /               list (public)
/// POST /               create
/// PUT  /{id}           update
/// PUT  /delete/{id}    soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::list_actors).post(actors::create_actor))
        .route("/{id}", put(actors::update_actor))
        .route("/delete/{id}", put(actors::delete_actor))
}
