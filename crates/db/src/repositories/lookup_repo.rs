//! Read-only access to lookup tables and the filter sidebar lists.

use sqlx::PgPool;

use crate::models::lookup::{NamedRef, Platform};

/// Lookup lists. Every list is ordered by name and excludes soft-deleted rows.
pub struct LookupRepo;

impl LookupRepo {
    pub async fn statuses(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>("SELECT id, name FROM status ORDER BY name")
            .fetch_all(pool)
            .await
    }

    pub async fn platforms(pool: &PgPool) -> Result<Vec<Platform>, sqlx::Error> {
        sqlx::query_as::<_, Platform>(
            "SELECT id, platform_name FROM availability ORDER BY platform_name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn genre_names(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, name FROM genres WHERE deleted_at IS NULL ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn award_names(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, awards_name AS name FROM awards \
             WHERE deleted_at IS NULL ORDER BY awards_name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn country_names(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, country_name AS name FROM countries \
             WHERE deleted_at IS NULL ORDER BY country_name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn platform_names(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, platform_name AS name FROM availability ORDER BY platform_name",
        )
        .fetch_all(pool)
        .await
    }
}
