//! Repository for the `awards` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::award::{Award, AwardInput};

/// Provides CRUD operations for awards. Deletion is soft.
pub struct AwardRepo;

impl AwardRepo {
    /// List live awards with the name of the awarding country.
    pub async fn list(pool: &PgPool) -> Result<Vec<Award>, sqlx::Error> {
        sqlx::query_as::<_, Award>(
            "SELECT a.id, a.awards_name, c.country_name, a.awards_years \
             FROM awards a \
             JOIN countries c ON c.id = a.country_id \
             WHERE a.deleted_at IS NULL \
             ORDER BY a.awards_name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &AwardInput,
        country_id: DbId,
    ) -> Result<Award, sqlx::Error> {
        sqlx::query_as::<_, Award>(
            "WITH ins AS ( \
                INSERT INTO awards (awards_name, country_id, awards_years) \
                VALUES ($1, $2, $3) \
                RETURNING id, awards_name, country_id, awards_years \
             ) \
             SELECT ins.id, ins.awards_name, c.country_name, ins.awards_years \
             FROM ins JOIN countries c ON c.id = ins.country_id",
        )
        .bind(input.awards_name.trim())
        .bind(country_id)
        .bind(input.awards_years)
        .fetch_one(pool)
        .await
    }

    /// Overwrite a live award. Returns `None` if no such award exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AwardInput,
        country_id: DbId,
    ) -> Result<Option<Award>, sqlx::Error> {
        sqlx::query_as::<_, Award>(
            "WITH upd AS ( \
                UPDATE awards SET awards_name = $2, country_id = $3, awards_years = $4 \
                WHERE id = $1 AND deleted_at IS NULL \
                RETURNING id, awards_name, country_id, awards_years \
             ) \
             SELECT upd.id, upd.awards_name, c.country_name, upd.awards_years \
             FROM upd JOIN countries c ON c.id = upd.country_id",
        )
        .bind(id)
        .bind(input.awards_name.trim())
        .bind(country_id)
        .bind(input.awards_years)
        .fetch_optional(pool)
        .await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE awards SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
