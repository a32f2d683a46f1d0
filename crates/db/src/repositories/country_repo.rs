//! Repository for the `countries` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::country::Country;

/// Provides CRUD operations for countries. Deletion is soft.
pub struct CountryRepo;

impl CountryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "SELECT id, country_name FROM countries \
             WHERE deleted_at IS NULL ORDER BY country_name",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a live country by its exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "SELECT id, country_name FROM countries \
             WHERE country_name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, name: &str) -> Result<Country, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "INSERT INTO countries (country_name) VALUES ($1) RETURNING id, country_name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Rename a live country. Returns `None` if no such country exists.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "UPDATE countries SET country_name = $2 \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, country_name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE countries SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
