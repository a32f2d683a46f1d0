use axum::routing::{get, put};
use axum::Router;

use crate::handlers::awards;
use crate::state::AppState;

/// Routes mounted at `/awards`.
///
/// ```text
/// GET    /        list (admin)
/// POST   /        create
/// PUT    /{id}    update
/// DELETE /{id}    soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(awards::list_awards).post(awards::create_award))
        .route("/{id}", put(awards::update_award).delete(awards::delete_award))
}
