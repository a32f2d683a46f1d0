//! Fixtures shared by the database integration tests.

#![allow(dead_code)]

use cinedex_core::catalog::NameList;
use cinedex_core::status::MovieStatus;
use cinedex_core::types::DbId;
use cinedex_db::models::drama::{CastEntry, CastList, DramaInput};
use cinedex_db::repositories::{CountryRepo, DramaRepo, GenreRepo, MovieRepo};
use sqlx::PgPool;

/// A minimal drama with no associations.
pub fn drama(title: &str, release_year: i32) -> DramaInput {
    DramaInput {
        title: title.to_string(),
        alt_title: None,
        release_year,
        imdb_score: None,
        synopsis: None,
        view_count: None,
        poster: None,
        background: None,
        trailer: None,
        director: None,
        status: None,
        availability: None,
        country: None,
        genres: NameList::default(),
        actors: CastList::default(),
        awards: NameList::default(),
    }
}

pub fn names(items: &[&str]) -> NameList {
    NameList::Many(items.iter().map(|s| s.to_string()).collect())
}

pub fn cast(items: &[(&str, &str)]) -> CastList {
    CastList::Many(
        items
            .iter()
            .map(|(name, role)| CastEntry::Credit {
                name: name.to_string(),
                role: Some(role.to_string()),
            })
            .collect(),
    )
}

/// Create the named genres, returning their ids in order.
pub async fn seed_genres(pool: &PgPool, names: &[&str]) -> Vec<DbId> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        ids.push(GenreRepo::create(pool, name).await.unwrap().id);
    }
    ids
}

pub async fn seed_country(pool: &PgPool, name: &str) -> DbId {
    CountryRepo::create(pool, name).await.unwrap().id
}

/// Write a drama and publish it.
pub async fn publish(pool: &PgPool, input: &DramaInput) -> DbId {
    let outcome = DramaRepo::create(pool, input).await.unwrap();
    assert!(
        MovieRepo::set_status(pool, outcome.movie_id, MovieStatus::Published)
            .await
            .unwrap()
    );
    outcome.movie_id
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
