//! Composite writer for drama submissions: one movie row plus its genre,
//! cast, award and country junction rows, written in a single transaction.

use cinedex_core::status::MovieStatus;
use cinedex_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::drama::{DramaInput, DramaOutcome, DramaUpdate, UnresolvedRefs};

const GENRE_ID_BY_NAME: &str = "SELECT id FROM genres WHERE name = $1 AND deleted_at IS NULL";
const ACTOR_ID_BY_NAME: &str = "SELECT id FROM actors WHERE name = $1 AND deleted_at IS NULL";
const AWARD_ID_BY_NAME: &str =
    "SELECT id FROM awards WHERE awards_name = $1 AND deleted_at IS NULL";
const COUNTRY_ID_BY_NAME: &str =
    "SELECT id FROM countries WHERE country_name = $1 AND deleted_at IS NULL";
const STATUS_ID_BY_NAME: &str = "SELECT id FROM status WHERE name = $1";
const AVAILABILITY_ID_BY_NAME: &str = "SELECT id FROM availability WHERE platform_name = $1";

/// Writes a movie together with its associations.
///
/// Names that match no live row are skipped and reported in
/// [`DramaOutcome::unresolved`]; they never abort the write. Any database
/// error drops the transaction, so either everything is written or nothing.
pub struct DramaRepo;

impl DramaRepo {
    /// Insert a new movie in pending-review state and link its associations.
    pub async fn create(pool: &PgPool, input: &DramaInput) -> Result<DramaOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut unresolved = UnresolvedRefs::default();

        let (status_id, availability_id) =
            resolve_lookups(&mut tx, input, &mut unresolved).await?;

        let movie_id: DbId = sqlx::query_scalar(
            "INSERT INTO movies \
                (title, alt_title, release_year, imdb_score, synopsis, view_count, poster, \
                 background, trailer, director, status, status_id, availability_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING id",
        )
        .bind(input.title.trim())
        .bind(&input.alt_title)
        .bind(input.release_year)
        .bind(input.imdb_score)
        .bind(&input.synopsis)
        .bind(input.view_count.unwrap_or(0))
        .bind(&input.poster)
        .bind(&input.background)
        .bind(&input.trailer)
        .bind(&input.director)
        .bind(MovieStatus::PendingReview.as_i16())
        .bind(status_id)
        .bind(availability_id)
        .fetch_one(&mut *tx)
        .await?;

        link_associations(&mut tx, movie_id, input, &mut unresolved).await?;

        tx.commit().await?;
        Ok(DramaOutcome {
            movie_id,
            unresolved,
        })
    }

    /// Overwrite an existing movie, publish it, and replace its associations.
    ///
    /// Returns `None` if no movie with the given id exists.
    pub async fn update(
        pool: &PgPool,
        update: &DramaUpdate,
    ) -> Result<Option<DramaOutcome>, sqlx::Error> {
        let input = &update.drama;
        let mut tx = pool.begin().await?;
        let mut unresolved = UnresolvedRefs::default();

        let (status_id, availability_id) =
            resolve_lookups(&mut tx, input, &mut unresolved).await?;

        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE movies SET \
                title = $2, alt_title = $3, release_year = $4, imdb_score = $5, \
                synopsis = $6, view_count = COALESCE($7, view_count), poster = $8, \
                background = $9, trailer = $10, director = $11, status = $12, \
                status_id = $13, availability_id = $14 \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(update.id)
        .bind(input.title.trim())
        .bind(&input.alt_title)
        .bind(input.release_year)
        .bind(input.imdb_score)
        .bind(&input.synopsis)
        .bind(input.view_count)
        .bind(&input.poster)
        .bind(&input.background)
        .bind(&input.trailer)
        .bind(&input.director)
        .bind(MovieStatus::Published.as_i16())
        .bind(status_id)
        .bind(availability_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(movie_id) = updated else {
            return Ok(None);
        };

        clear_associations(&mut tx, movie_id).await?;
        link_associations(&mut tx, movie_id, input, &mut unresolved).await?;

        tx.commit().await?;
        Ok(Some(DramaOutcome {
            movie_id,
            unresolved,
        }))
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Resolve the release-status and platform names. Blank names map to `NULL`
/// silently; unknown names map to `NULL` and are reported.
async fn resolve_lookups(
    tx: &mut Transaction<'_, Postgres>,
    input: &DramaInput,
    unresolved: &mut UnresolvedRefs,
) -> Result<(Option<DbId>, Option<DbId>), sqlx::Error> {
    let mut status_id = None;
    if let Some(name) = non_blank(input.status.as_deref()) {
        status_id = find_id(tx, STATUS_ID_BY_NAME, name).await?;
        if status_id.is_none() {
            unresolved.status = Some(name.to_string());
        }
    }

    let mut availability_id = None;
    if let Some(name) = non_blank(input.availability.as_deref()) {
        availability_id = find_id(tx, AVAILABILITY_ID_BY_NAME, name).await?;
        if availability_id.is_none() {
            unresolved.availability = Some(name.to_string());
        }
    }

    Ok((status_id, availability_id))
}

/// Insert junction rows for every resolvable name.
async fn link_associations(
    tx: &mut Transaction<'_, Postgres>,
    movie_id: DbId,
    input: &DramaInput,
    unresolved: &mut UnresolvedRefs,
) -> Result<(), sqlx::Error> {
    for genre in input.genres.normalize() {
        match find_id(tx, GENRE_ID_BY_NAME, &genre).await? {
            Some(genre_id) => {
                sqlx::query(
                    "INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2) \
                     ON CONFLICT DO NOTHING",
                )
                .bind(movie_id)
                .bind(genre_id)
                .execute(&mut **tx)
                .await?;
            }
            None => unresolved.genres.push(genre),
        }
    }

    for credit in input.actors.normalize() {
        match find_id(tx, ACTOR_ID_BY_NAME, &credit.name).await? {
            Some(actor_id) => {
                sqlx::query(
                    "INSERT INTO movie_actors (movie_id, actor_id, role) VALUES ($1, $2, $3) \
                     ON CONFLICT DO NOTHING",
                )
                .bind(movie_id)
                .bind(actor_id)
                .bind(&credit.role)
                .execute(&mut **tx)
                .await?;
            }
            None => unresolved.actors.push(credit.name),
        }
    }

    for award in input.awards.normalize() {
        match find_id(tx, AWARD_ID_BY_NAME, &award).await? {
            Some(awards_id) => {
                sqlx::query(
                    "INSERT INTO movie_awards (movie_id, awards_id) VALUES ($1, $2) \
                     ON CONFLICT DO NOTHING",
                )
                .bind(movie_id)
                .bind(awards_id)
                .execute(&mut **tx)
                .await?;
            }
            None => unresolved.awards.push(award),
        }
    }

    if let Some(country) = non_blank(input.country.as_deref()) {
        match find_id(tx, COUNTRY_ID_BY_NAME, country).await? {
            Some(country_id) => {
                sqlx::query(
                    "INSERT INTO movie_countries (movie_id, country_id) VALUES ($1, $2) \
                     ON CONFLICT DO NOTHING",
                )
                .bind(movie_id)
                .bind(country_id)
                .execute(&mut **tx)
                .await?;
            }
            None => unresolved.country = Some(country.to_string()),
        }
    }

    Ok(())
}

/// Delete every junction row of a movie.
async fn clear_associations(
    tx: &mut Transaction<'_, Postgres>,
    movie_id: DbId,
) -> Result<(), sqlx::Error> {
    for table in ["movie_genres", "movie_actors", "movie_awards", "movie_countries"] {
        sqlx::query(&format!("DELETE FROM {table} WHERE movie_id = $1"))
            .bind(movie_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

async fn find_id(
    tx: &mut Transaction<'_, Postgres>,
    query: &str,
    name: &str,
) -> Result<Option<DbId>, sqlx::Error> {
    sqlx::query_scalar::<_, DbId>(query)
        .bind(name)
        .fetch_optional(&mut **tx)
        .await
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
