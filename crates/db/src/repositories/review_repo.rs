//! Repository for the `reviews` table.

use cinedex_core::status::{REVIEW_APPROVED, REVIEW_PENDING};
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{PublicReview, Review, ReviewWithContext};

const COLUMNS: &str = "id, movie_id, user_id, content, rating, status, created_at";

/// Provides moderation and read access for reviews. Deletion is soft.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Create a pending review.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
        content: &str,
        rating: i16,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (movie_id, user_id, content, rating, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(movie_id)
            .bind(user_id)
            .bind(content)
            .bind(rating)
            .bind(REVIEW_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Approved, non-deleted reviews of a movie, newest first.
    pub async fn list_approved_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<PublicReview>, sqlx::Error> {
        sqlx::query_as::<_, PublicReview>(
            "SELECT r.id, r.content, r.rating, r.created_at, u.username, u.profile_picture \
             FROM reviews r \
             JOIN users u ON u.id = r.user_id \
             WHERE r.movie_id = $1 AND r.status = $2 AND r.deleted_at IS NULL \
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(movie_id)
        .bind(REVIEW_APPROVED)
        .fetch_all(pool)
        .await
    }

    /// Every non-deleted review with movie title and author, newest first.
    pub async fn list_for_moderation(
        pool: &PgPool,
    ) -> Result<Vec<ReviewWithContext>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithContext>(
            "SELECT r.id, r.movie_id, m.title AS movie_title, r.user_id, u.username, \
                    r.content, r.rating, r.status, r.created_at \
             FROM reviews r \
             JOIN movies m ON m.id = r.movie_id \
             JOIN users u ON u.id = r.user_id \
             WHERE r.deleted_at IS NULL \
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Whether the user has a non-deleted review of the movie.
    pub async fn has_reviewed(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS( \
                SELECT 1 FROM reviews \
                WHERE movie_id = $1 AND user_id = $2 AND deleted_at IS NULL)",
        )
        .bind(movie_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Returns `true` if a live review was approved.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE reviews SET status = $2 WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .bind(REVIEW_APPROVED)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE reviews SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
