//! Repository for the `genres` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;

/// Provides CRUD operations for genres. Deletion is soft.
pub struct GenreRepo;

impl GenreRepo {
    /// List live genres ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE deleted_at IS NULL ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &PgPool, name: &str) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Rename a live genre. Returns `None` if no such genre exists.
    pub async fn rename(pool: &PgPool, id: DbId, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $2 \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Soft-delete a genre. Existing `movie_genres` rows are kept.
    ///
    /// Returns `true` if the row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE genres SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
