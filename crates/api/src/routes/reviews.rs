use axum::routing::{get, put};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET  /                    moderation list (admin)
/// POST /                    submit (auth)
/// PUT  /{id}/approve        approve (admin)
/// PUT  /{id}/soft-delete    soft delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_reviews).post(reviews::create_review))
        .route("/{id}/approve", put(reviews::approve_review))
        .route("/{id}/soft-delete", put(reviews::delete_review))
}
