//! Repository for reading `movies` and moving them through the publication
//! lifecycle. Writes that touch association tables live in
//! [`super::DramaRepo`].

use cinedex_core::pagination::PageWindow;
use cinedex_core::status::MovieStatus;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::filter::{bind_values, bind_values_scalar, MovieListFilter, WhereClause};
use crate::models::lookup::NamedRef;
use crate::models::movie::{
    AdminMovieRow, CastMember, Movie, MovieDetail, MovieDetailRow, MovieHighlight, MovieListItem,
    MoviePage,
};

/// Lookup joins shared by the listing and its COUNT query. Filters on
/// `s.name` and `av.platform_name` rely on these aliases.
const LOOKUP_JOINS: &str = "LEFT JOIN status s ON s.id = m.status_id \
     LEFT JOIN availability av ON av.id = m.availability_id";

const GENRES_AGG: &str = "(SELECT string_agg(g.name, ', ' ORDER BY g.name) \
     FROM movie_genres mg JOIN genres g ON g.id = mg.genre_id \
     WHERE mg.movie_id = m.id) AS genres";

const COUNTRIES_AGG: &str = "(SELECT string_agg(c.country_name, ', ' ORDER BY c.country_name) \
     FROM movie_countries mc JOIN countries c ON c.id = mc.country_id \
     WHERE mc.movie_id = m.id) AS countries";

const AWARDS_AGG: &str = "(SELECT string_agg(a.awards_name, ', ' ORDER BY a.awards_name) \
     FROM movie_awards ma JOIN awards a ON a.id = ma.awards_id \
     WHERE ma.movie_id = m.id) AS awards";

/// `Name (Role)` pairs; the role suffix is omitted when no role was recorded.
const ACTORS_AGG: &str = "(SELECT string_agg(a.name || COALESCE(' (' || ma.role || ')', ''), \
     ', ' ORDER BY a.name) \
     FROM movie_actors ma JOIN actors a ON a.id = ma.actor_id \
     WHERE ma.movie_id = m.id) AS actors";

/// Column list for the `movies` table.
pub(crate) const COLUMNS: &str = "id, title, alt_title, release_year, imdb_score, synopsis, \
    view_count, poster, background, trailer, director, status, status_id, availability_id, \
    created_at, updated_at";

const HIGHLIGHT_COLUMNS: &str = "id, title, poster, background, imdb_score, synopsis";

/// Maximum rows returned by quick title search.
pub const SEARCH_LIMIT: i64 = 10;
/// Size of the top-rated carousel.
pub const TOP_RATED_LIMIT: i64 = 15;
/// Size of the featured strip.
pub const FEATURED_LIMIT: i64 = 10;

/// Read access to movies plus lifecycle transitions.
pub struct MovieRepo;

impl MovieRepo {
    /// One page of published movies matching `filter`, plus the total number
    /// of matches.
    ///
    /// The listing and the COUNT are rendered from the same [`WhereClause`].
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &MovieListFilter,
        window: PageWindow,
    ) -> Result<MoviePage, sqlx::Error> {
        let clause = WhereClause::build(&filter.clauses());
        let limit_idx = clause.next_placeholder();
        let offset_idx = limit_idx + 1;

        let list_query = format!(
            "SELECT m.id, m.title, m.poster, m.release_year, m.imdb_score, m.view_count, \
                    {GENRES_AGG}, {COUNTRIES_AGG}, {AWARDS_AGG}, \
                    s.name AS status, av.platform_name AS availability \
             FROM movies m {LOOKUP_JOINS} \
             {where_sql} \
             ORDER BY {order_by} \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            where_sql = clause.sql,
            order_by = filter.order_by(),
        );
        let count_query = format!(
            "SELECT COUNT(*) FROM movies m {LOOKUP_JOINS} {where_sql}",
            where_sql = clause.sql,
        );

        let movies = bind_values(sqlx::query_as::<_, MovieListItem>(&list_query), &clause.binds)
            .bind(window.limit)
            .bind(window.offset())
            .fetch_all(pool)
            .await?;

        let total_count = bind_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), &clause.binds)
            .fetch_one(pool)
            .await?;

        Ok(MoviePage {
            movies,
            total_count,
            page: window.page,
            limit: window.limit,
        })
    }

    /// Published movies whose title contains `term`, capped at [`SEARCH_LIMIT`].
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<MovieListItem>, sqlx::Error> {
        let filter = MovieListFilter {
            search: Some(term.to_string()),
            ..Default::default()
        };
        let page = Self::list_filtered(pool, &filter, PageWindow::new(Some(1), Some(SEARCH_LIMIT)))
            .await?;
        Ok(page.movies)
    }

    /// A published movie with all of its associations.
    pub async fn find_published_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieDetail>, sqlx::Error> {
        let query = format!(
            "SELECT m.id, m.title, m.alt_title, m.release_year, m.imdb_score, m.synopsis, \
                    m.view_count, m.poster, m.background, m.trailer, m.director, \
                    av.platform_name AS availability, s.name AS status \
             FROM movies m {LOOKUP_JOINS} \
             WHERE m.id = $1 AND m.status = $2"
        );
        let Some(row) = sqlx::query_as::<_, MovieDetailRow>(&query)
            .bind(id)
            .bind(MovieStatus::Published.as_i16())
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let (genres, countries, actors, awards) = tokio::try_join!(
            Self::genres_of(pool, id),
            Self::countries_of(pool, id),
            Self::cast_of(pool, id),
            Self::awards_of(pool, id),
        )?;

        Ok(Some(MovieDetail::assemble(row, genres, countries, actors, awards)))
    }

    pub async fn genres_of(pool: &PgPool, movie_id: DbId) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT g.id, g.name FROM genres g \
             JOIN movie_genres mg ON mg.genre_id = g.id \
             WHERE mg.movie_id = $1 ORDER BY g.name",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    pub async fn countries_of(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT c.id, c.country_name AS name FROM countries c \
             JOIN movie_countries mc ON mc.country_id = c.id \
             WHERE mc.movie_id = $1 ORDER BY c.country_name",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    pub async fn cast_of(pool: &PgPool, movie_id: DbId) -> Result<Vec<CastMember>, sqlx::Error> {
        sqlx::query_as::<_, CastMember>(
            "SELECT a.id, a.name, ma.role, a.actor_picture FROM actors a \
             JOIN movie_actors ma ON ma.actor_id = a.id \
             WHERE ma.movie_id = $1 ORDER BY a.name",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    pub async fn awards_of(pool: &PgPool, movie_id: DbId) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT a.id, a.awards_name AS name FROM awards a \
             JOIN movie_awards ma ON ma.awards_id = a.id \
             WHERE ma.movie_id = $1 ORDER BY a.awards_name",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Highest-rated published movies.
    pub async fn top_rated(pool: &PgPool, limit: i64) -> Result<Vec<MovieHighlight>, sqlx::Error> {
        let query = format!(
            "SELECT {HIGHLIGHT_COLUMNS} FROM movies \
             WHERE status = $1 AND imdb_score IS NOT NULL \
             ORDER BY imdb_score DESC, id \
             LIMIT $2"
        );
        sqlx::query_as::<_, MovieHighlight>(&query)
            .bind(MovieStatus::Published.as_i16())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Highest-rated published movies from the latest release year on record.
    pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<MovieHighlight>, sqlx::Error> {
        let query = format!(
            "SELECT {HIGHLIGHT_COLUMNS} FROM movies \
             WHERE status = $1 \
               AND release_year = (SELECT MAX(release_year) FROM movies WHERE status = $1) \
             ORDER BY imdb_score DESC NULLS LAST, id \
             LIMIT $2"
        );
        sqlx::query_as::<_, MovieHighlight>(&query)
            .bind(MovieStatus::Published.as_i16())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Earliest and latest release year among published movies.
    pub async fn release_year_bounds(
        pool: &PgPool,
    ) -> Result<Option<(i32, i32)>, sqlx::Error> {
        let (min, max): (Option<i32>, Option<i32>) = sqlx::query_as(
            "SELECT MIN(release_year), MAX(release_year) FROM movies WHERE status = $1",
        )
        .bind(MovieStatus::Published.as_i16())
        .fetch_one(pool)
        .await?;
        Ok(min.zip(max))
    }

    /// Every movie for the admin table, newest first, optionally narrowed to
    /// one publication status.
    pub async fn list_admin(
        pool: &PgPool,
        status: Option<MovieStatus>,
    ) -> Result<Vec<AdminMovieRow>, sqlx::Error> {
        let query = format!(
            "SELECT m.id, m.status, m.title, m.alt_title, m.director, m.imdb_score, \
                    m.poster, m.background, m.trailer, m.view_count, m.release_year, \
                    m.synopsis, m.status_id, m.availability_id, \
                    {ACTORS_AGG}, {GENRES_AGG}, {COUNTRIES_AGG}, {AWARDS_AGG} \
             FROM movies m \
             WHERE ($1::SMALLINT IS NULL OR m.status = $1) \
             ORDER BY m.id DESC"
        );
        sqlx::query_as::<_, AdminMovieRow>(&query)
            .bind(status.map(MovieStatus::as_i16))
            .fetch_all(pool)
            .await
    }

    /// Move a movie to `status`. Returns `false` if the movie does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: MovieStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE movies SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_i16())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Raw movie row regardless of publication status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
