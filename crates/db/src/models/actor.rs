//! Actor entity model and DTOs.

use chrono::NaiveDate;
use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An actor row joined with the name of their birth country.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub birthdate: NaiveDate,
    pub country_name: String,
    pub actor_picture: Option<String>,
}

/// DTO for creating or updating an actor.
///
/// The birth country is given by name and must already exist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActorInput {
    #[validate(length(min = 1, message = "Actor name is required"))]
    pub name: String,
    pub birthdate: NaiveDate,
    #[validate(length(min = 1, message = "Country name is required"))]
    pub country_name: String,
    pub actor_picture: Option<String>,
}
