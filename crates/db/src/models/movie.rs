//! Movie read models: listing rows, detail views, and admin projections.

use cinedex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::lookup::NamedRef;

/// A full row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub alt_title: Option<String>,
    pub release_year: i32,
    pub imdb_score: Option<f64>,
    pub synopsis: Option<String>,
    pub view_count: i64,
    pub poster: Option<String>,
    pub background: Option<String>,
    pub trailer: Option<String>,
    pub director: Option<String>,
    /// Publication lifecycle code, see [`cinedex_core::status::MovieStatus`].
    pub status: i16,
    pub status_id: Option<DbId>,
    pub availability_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One card of the public movie listing.
///
/// Association columns are comma-separated aggregates of every linked value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieListItem {
    pub id: DbId,
    pub title: String,
    pub poster: Option<String>,
    pub release_year: i32,
    pub imdb_score: Option<f64>,
    pub view_count: i64,
    pub genres: Option<String>,
    pub countries: Option<String>,
    pub awards: Option<String>,
    pub status: Option<String>,
    pub availability: Option<String>,
}

/// A page of listing results plus the total number of matches.
#[derive(Debug, Clone, Serialize)]
pub struct MoviePage {
    pub movies: Vec<MovieListItem>,
    pub total_count: i64,
    pub page: i64,
    pub limit: i64,
}

/// Scalar part of the movie detail view.
#[derive(Debug, Clone, FromRow)]
pub struct MovieDetailRow {
    pub id: DbId,
    pub title: String,
    pub alt_title: Option<String>,
    pub release_year: i32,
    pub imdb_score: Option<f64>,
    pub synopsis: Option<String>,
    pub view_count: i64,
    pub poster: Option<String>,
    pub background: Option<String>,
    pub trailer: Option<String>,
    pub director: Option<String>,
    pub availability: Option<String>,
    pub status: Option<String>,
}

/// An actor credited on a movie.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    pub id: DbId,
    pub name: String,
    pub role: Option<String>,
    pub actor_picture: Option<String>,
}

/// Movie detail page: scalar fields plus every association.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub title: String,
    pub alt_title: Option<String>,
    pub release_year: i32,
    pub imdb_score: Option<f64>,
    pub synopsis: Option<String>,
    pub view_count: i64,
    pub poster: Option<String>,
    pub background: Option<String>,
    pub trailer: Option<String>,
    pub director: Option<String>,
    pub genres: Vec<NamedRef>,
    pub countries: Vec<NamedRef>,
    pub actors: Vec<CastMember>,
    pub awards: Vec<NamedRef>,
    pub availability: Option<String>,
    pub status: Option<String>,
}

impl MovieDetail {
    pub fn assemble(
        row: MovieDetailRow,
        genres: Vec<NamedRef>,
        countries: Vec<NamedRef>,
        actors: Vec<CastMember>,
        awards: Vec<NamedRef>,
    ) -> Self {
        Self {
            id: row.id,
            title: row.title,
            alt_title: row.alt_title,
            release_year: row.release_year,
            imdb_score: row.imdb_score,
            synopsis: row.synopsis,
            view_count: row.view_count,
            poster: row.poster,
            background: row.background,
            trailer: row.trailer,
            director: row.director,
            genres,
            countries,
            actors,
            awards,
            availability: row.availability,
            status: row.status,
        }
    }
}

/// A highlighted movie for the top-rated carousel and featured strip.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieHighlight {
    pub id: DbId,
    pub title: String,
    pub poster: Option<String>,
    pub background: Option<String>,
    pub imdb_score: Option<f64>,
    pub synopsis: Option<String>,
}

/// Admin movie table row with all associations flattened to strings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminMovieRow {
    pub id: DbId,
    pub status: i16,
    pub title: String,
    pub alt_title: Option<String>,
    pub director: Option<String>,
    pub imdb_score: Option<f64>,
    pub poster: Option<String>,
    pub background: Option<String>,
    pub trailer: Option<String>,
    pub view_count: i64,
    pub release_year: i32,
    pub synopsis: Option<String>,
    pub status_id: Option<DbId>,
    pub availability_id: Option<DbId>,
    /// `Name (Role)` pairs.
    pub actors: Option<String>,
    pub genres: Option<String>,
    pub countries: Option<String>,
    pub awards: Option<String>,
}
