//! Genre entity model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A live (non-deleted) row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating or renaming a genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenreInput {
    #[validate(length(min = 1, message = "Genre name is required"))]
    pub name: String,
}
