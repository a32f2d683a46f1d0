//! Handlers for the `/countries` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::country::CountryInput;
use cinedex_db::repositories::CountryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::handlers::required;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/countries
pub async fn list_countries(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let countries = CountryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: countries }))
}

/// GET /api/v1/countries/{name}
///
/// Public lookup by exact country name.
pub async fn get_country_by_name(
    State(state): State<AppState>,
    PathParams(name): PathParams<String>,
) -> AppResult<impl IntoResponse> {
    let country = CountryRepo::find_by_name(&state.pool, name.trim())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Country '{name}' not found")))?;
    Ok(Json(DataResponse { data: country }))
}

/// POST /api/v1/countries
pub async fn create_country(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CountryInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let name = required(&input.country_name, "Country name")?;

    let country = CountryRepo::create(&state.pool, name).await?;
    tracing::info!(country_id = country.id, user_id = admin.user_id, "Country created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: country })))
}

/// PUT /api/v1/countries/{id}
pub async fn update_country(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<CountryInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let name = required(&input.country_name, "Country name")?;

    let country = CountryRepo::rename(&state.pool, id, name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    tracing::info!(country_id = id, user_id = admin.user_id, "Country renamed");

    Ok(Json(DataResponse { data: country }))
}

/// PUT /api/v1/countries/delete/{id}
pub async fn delete_country(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CountryRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }));
    }
    tracing::info!(country_id = id, user_id = admin.user_id, "Country soft-deleted");

    Ok(Json(DataResponse::ack("Country deleted")))
}
