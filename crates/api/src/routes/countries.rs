use axum::routing::{get, put};
use axum::Router;

use crate::handlers::countries;
use crate::state::AppState;

/// Routes mounted at `/countries`.
///
/// ```text
/// GET  /               list (admin)
/// POST /               create
/// GET  /{name}         lookup by name (public)
/// PUT  /{id}           rename
/// PUT  /delete/{id}    soft delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(countries::list_countries).post(countries::create_country),
        )
        .route(
            "/{key}",
            get(countries::get_country_by_name).put(countries::update_country),
        )
        .route("/delete/{id}", put(countries::delete_country))
}
