//! Handlers for submitting and editing a movie together with its genres,
//! cast, awards and country.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::drama::{DramaInput, DramaOutcome, DramaUpdate};
use cinedex_db::repositories::DramaRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::handlers::required;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/add-drama
///
/// Any signed-in user may submit a movie; it waits in pending review until
/// an admin publishes it. Unknown association names are skipped and listed
/// under `unresolved`.
pub async fn add_drama(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<DramaInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    required(&input.title, "Title")?;

    let outcome = DramaRepo::create(&state.pool, &input).await?;
    log_outcome("Drama submitted", user.user_id, &outcome);

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

/// PUT /api/v1/update-drama
///
/// Overwrites the movie, replaces all of its associations and publishes it.
pub async fn update_drama(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(update): JsonBody<DramaUpdate>,
) -> AppResult<impl IntoResponse> {
    update.drama.validate()?;
    required(&update.drama.title, "Title")?;

    let outcome = DramaRepo::update(&state.pool, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: update.id,
        }))?;
    log_outcome("Drama updated", admin.user_id, &outcome);

    Ok(Json(DataResponse { data: outcome }))
}

fn log_outcome(message: &str, user_id: DbId, outcome: &DramaOutcome) {
    let unresolved = &outcome.unresolved;
    if unresolved.is_empty() {
        tracing::info!(movie_id = outcome.movie_id, user_id, "{message}");
    } else {
        tracing::warn!(
            movie_id = outcome.movie_id,
            user_id,
            skipped_genres = unresolved.genres.len(),
            skipped_actors = unresolved.actors.len(),
            skipped_awards = unresolved.awards.len(),
            skipped_country = unresolved.country.is_some(),
            "{message} with unresolved references",
        );
    }
}
