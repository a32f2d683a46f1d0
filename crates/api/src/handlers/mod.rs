//! HTTP handlers, one module per resource.

pub mod actors;
pub mod admin;
pub mod auth;
pub mod awards;
pub mod catalog;
pub mod countries;
pub mod drama;
pub mod genres;
pub mod reviews;
pub mod users;

use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::repositories::CountryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Trimmed `value`, or a validation error naming `field` when it is blank.
pub(crate) fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        ))));
    }
    Ok(trimmed)
}

/// Resolve a live country by name; unknown names are a 400.
pub(crate) async fn country_id_by_name(state: &AppState, name: &str) -> AppResult<DbId> {
    let name = required(name, "Country name")?;
    let country = CountryRepo::find_by_name(&state.pool, name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::UnknownName {
                entity: "Country",
                name: name.to_string(),
            })
        })?;
    Ok(country.id)
}
