//! Repository for the `actors` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, ActorInput};

/// Provides CRUD operations for actors. Deletion is soft.
///
/// Writes take the already-resolved birth country id; callers look the
/// country up by name first.
pub struct ActorRepo;

impl ActorRepo {
    /// List live actors with their birth-country name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT a.id, a.name, a.birthdate, c.country_name, a.actor_picture \
             FROM actors a \
             JOIN countries c ON c.id = a.country_birth_id \
             WHERE a.deleted_at IS NULL \
             ORDER BY a.name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &ActorInput,
        country_id: DbId,
    ) -> Result<Actor, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "WITH ins AS ( \
                INSERT INTO actors (name, birthdate, country_birth_id, actor_picture) \
                VALUES ($1, $2, $3, $4) \
                RETURNING id, name, birthdate, country_birth_id, actor_picture \
             ) \
             SELECT ins.id, ins.name, ins.birthdate, c.country_name, ins.actor_picture \
             FROM ins JOIN countries c ON c.id = ins.country_birth_id",
        )
        .bind(input.name.trim())
        .bind(input.birthdate)
        .bind(country_id)
        .bind(&input.actor_picture)
        .fetch_one(pool)
        .await
    }

    /// Overwrite a live actor. Returns `None` if no such actor exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ActorInput,
        country_id: DbId,
    ) -> Result<Option<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "WITH upd AS ( \
                UPDATE actors SET name = $2, birthdate = $3, country_birth_id = $4, \
                    actor_picture = $5 \
                WHERE id = $1 AND deleted_at IS NULL \
                RETURNING id, name, birthdate, country_birth_id, actor_picture \
             ) \
             SELECT upd.id, upd.name, upd.birthdate, c.country_name, upd.actor_picture \
             FROM upd JOIN countries c ON c.id = upd.country_birth_id",
        )
        .bind(id)
        .bind(input.name.trim())
        .bind(input.birthdate)
        .bind(country_id)
        .bind(&input.actor_picture)
        .fetch_optional(pool)
        .await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actors SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
