//! Review entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An approved review as shown on a movie page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicReview {
    pub id: DbId,
    pub content: String,
    pub rating: i16,
    pub created_at: Timestamp,
    pub username: String,
    pub profile_picture: Option<String>,
}

/// A review row for the moderation table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithContext {
    pub id: DbId,
    pub movie_id: DbId,
    pub movie_title: String,
    pub user_id: DbId,
    pub username: String,
    pub content: String,
    pub rating: i16,
    pub status: i16,
    pub created_at: Timestamp,
}

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub rating: i16,
    pub status: i16,
    pub created_at: Timestamp,
}

/// DTO for submitting a review. The author is always the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    pub movie_id: DbId,
    #[validate(length(min = 1, message = "Review content is required"))]
    pub content: String,
    #[validate(range(min = 1, max = 10, message = "Rating must be between 1 and 10"))]
    pub rating: i16,
}
