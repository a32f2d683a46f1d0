//! Award entity model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An award row joined with the name of its country.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Award {
    pub id: DbId,
    pub awards_name: String,
    pub country_name: String,
    pub awards_years: i32,
}

/// DTO for creating or updating an award.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AwardInput {
    #[validate(length(min = 1, message = "Award name is required"))]
    pub awards_name: String,
    #[validate(length(min = 1, message = "Country name is required"))]
    pub country_name: String,
    #[validate(range(min = 1800, max = 3000, message = "awards_years must be a plausible year"))]
    pub awards_years: i32,
}
