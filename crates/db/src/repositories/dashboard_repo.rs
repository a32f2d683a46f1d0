//! Aggregate queries for the admin dashboard.

use cinedex_core::status::MovieStatus;
use sqlx::PgPool;

use crate::models::dashboard::{DashboardCounts, DecadeStat};

pub struct DashboardRepo;

impl DashboardRepo {
    /// Row counts for the landing cards, fetched concurrently.
    ///
    /// Permanently deleted movies and soft-deleted reference rows are excluded.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        let movies = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE status <> $1")
            .bind(MovieStatus::PermanentlyDeleted.as_i16())
            .fetch_one(pool);
        let genres = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM genres WHERE deleted_at IS NULL",
        )
        .fetch_one(pool);
        let countries = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM countries WHERE deleted_at IS NULL",
        )
        .fetch_one(pool);
        let awards = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM awards WHERE deleted_at IS NULL",
        )
        .fetch_one(pool);

        let (movie_count, genre_count, country_count, award_count) =
            tokio::try_join!(movies, genres, countries, awards)?;

        Ok(DashboardCounts {
            movie_count,
            genre_count,
            country_count,
            award_count,
        })
    }

    /// Movies and distinct linked genres per release decade, oldest first.
    pub async fn decade_stats(pool: &PgPool) -> Result<Vec<DecadeStat>, sqlx::Error> {
        sqlx::query_as::<_, DecadeStat>(
            "SELECT (m.release_year / 10) * 10 AS decade, \
                    COUNT(DISTINCT m.id) AS movie_count, \
                    COUNT(DISTINCT mg.genre_id) AS genre_count \
             FROM movies m \
             LEFT JOIN movie_genres mg ON mg.movie_id = m.id \
             WHERE m.status <> $1 \
             GROUP BY decade \
             ORDER BY decade",
        )
        .bind(MovieStatus::PermanentlyDeleted.as_i16())
        .fetch_all(pool)
        .await
    }
}
