//! Handlers for the `/reviews` resource.
//!
//! Reviews are created pending and only appear on the movie page after an
//! admin approves them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::review::CreateReview;
use cinedex_db::repositories::{MovieRepo, ReviewRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::handlers::required;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reviews
pub async fn list_reviews(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewRepo::list_for_moderation(&state.pool).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /api/v1/reviews
pub async fn create_review(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateReview>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let content = required(&input.content, "Review content")?;

    if !MovieRepo::exists(&state.pool, input.movie_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: input.movie_id,
        }));
    }
    if ReviewRepo::has_reviewed(&state.pool, input.movie_id, user.user_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already reviewed this movie".into(),
        )));
    }

    let review =
        ReviewRepo::create(&state.pool, input.movie_id, user.user_id, content, input.rating)
            .await?;
    tracing::info!(
        review_id = review.id,
        movie_id = input.movie_id,
        user_id = user.user_id,
        "Review submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// PUT /api/v1/reviews/{id}/approve
pub async fn approve_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ReviewRepo::approve(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Review", id }));
    }
    tracing::info!(review_id = id, user_id = admin.user_id, "Review approved");

    Ok(Json(DataResponse::ack("Review approved")))
}

/// PUT /api/v1/reviews/{id}/soft-delete
pub async fn delete_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ReviewRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Review", id }));
    }
    tracing::info!(review_id = id, user_id = admin.user_id, "Review soft-deleted");

    Ok(Json(DataResponse::ack("Review deleted")))
}
