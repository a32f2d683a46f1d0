use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users` (admin only).
///
/// ```text
/// GET    /                list visible users
/// POST   /                create
/// PUT    /{id}            update
/// DELETE /{id}            mark deleted
/// PUT    /suspend/{id}    suspend
/// PUT    /unlock/{id}     reactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", put(users::update_user).delete(users::delete_user))
        .route("/suspend/{id}", put(users::suspend_user))
        .route("/unlock/{id}", put(users::unlock_user))
}
