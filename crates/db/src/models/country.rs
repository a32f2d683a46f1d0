//! Country entity model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `countries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub country_name: String,
}

/// DTO for creating or renaming a country.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CountryInput {
    #[validate(length(min = 1, message = "Country name is required"))]
    pub country_name: String,
}
