//! Integration tests for the filtered movie listing.
//!
//! Verifies that:
//! - The COUNT always equals the number of rows listed with an unbounded page
//! - Page windows are contiguous slices of the full sorted result
//! - Association filters never truncate the aggregated association columns
//! - Only published movies are listed

mod common;

use cinedex_core::catalog::{SortOrder, YearRange};
use cinedex_core::pagination::{PageWindow, MAX_PAGE_LIMIT};
use cinedex_core::status::MovieStatus;
use cinedex_db::filter::MovieListFilter;
use cinedex_db::repositories::{DramaRepo, MovieRepo};
use common::{drama, names, publish, seed_country, seed_genres};
use sqlx::PgPool;

fn everything() -> PageWindow {
    PageWindow::new(Some(1), Some(MAX_PAGE_LIMIT))
}

/// Five published movies and one pending one.
async fn seed_catalog(pool: &PgPool) {
    seed_genres(pool, &["Drama", "Comedy", "Thriller"]).await;
    seed_country(pool, "South Korea").await;
    seed_country(pool, "Japan").await;

    let mut signal = drama("Signal", 2016);
    signal.genres = names(&["Thriller", "Drama"]);
    signal.country = Some("South Korea".into());
    signal.status = Some("Completed".into());
    signal.availability = Some("Netflix".into());
    publish(pool, &signal).await;

    let mut reply = drama("Reply 1988", 2015);
    reply.genres = names(&["Comedy", "Drama"]);
    reply.country = Some("South Korea".into());
    reply.status = Some("Completed".into());
    publish(pool, &reply).await;

    let mut midnight = drama("Midnight Diner", 2009);
    midnight.genres = names(&["Drama"]);
    midnight.country = Some("Japan".into());
    midnight.availability = Some("Netflix".into());
    publish(pool, &midnight).await;

    let mut hanzawa = drama("Hanzawa Naoki", 2013);
    hanzawa.genres = names(&["Thriller"]);
    hanzawa.country = Some("Japan".into());
    publish(pool, &hanzawa).await;

    let mut moving = drama("Moving", 2023);
    moving.status = Some("Ongoing".into());
    publish(pool, &moving).await;

    let mut pending = drama("Pending Drama", 2020);
    pending.genres = names(&["Drama"]);
    DramaRepo::create(pool, &pending).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_matches_rows_for_every_filter(pool: PgPool) {
    seed_catalog(&pool).await;

    let filters = vec![
        MovieListFilter::default(),
        MovieListFilter {
            genre: Some("Drama".into()),
            ..Default::default()
        },
        MovieListFilter {
            country: Some("Japan".into()),
            genre: Some("Thriller".into()),
            ..Default::default()
        },
        MovieListFilter {
            year_range: Some(YearRange { start: 2010, end: 2016 }),
            ..Default::default()
        },
        MovieListFilter {
            status: Some("Completed".into()),
            availability: Some("Netflix".into()),
            ..Default::default()
        },
        MovieListFilter {
            search: Some("in".into()),
            sort: Some(SortOrder::Desc),
            ..Default::default()
        },
        MovieListFilter {
            award: Some("Nobody Won This".into()),
            ..Default::default()
        },
    ];

    for filter in filters {
        let page = MovieRepo::list_filtered(&pool, &filter, everything())
            .await
            .unwrap();
        assert_eq!(
            page.total_count,
            page.movies.len() as i64,
            "count mismatch for {filter:?}"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unpublished_movies_are_not_listed(pool: PgPool) {
    seed_catalog(&pool).await;

    let page = MovieRepo::list_filtered(&pool, &MovieListFilter::default(), everything())
        .await
        .unwrap();

    assert_eq!(page.total_count, 5);
    assert!(page.movies.iter().all(|m| m.title != "Pending Drama"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_windows_slice_the_sorted_result(pool: PgPool) {
    seed_catalog(&pool).await;

    let filter = MovieListFilter {
        sort: Some(SortOrder::Asc),
        ..Default::default()
    };
    let full = MovieRepo::list_filtered(&pool, &filter, everything())
        .await
        .unwrap();
    let titles: Vec<&str> = full.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Hanzawa Naoki", "Midnight Diner", "Moving", "Reply 1988", "Signal"]
    );

    for page in 1..=3 {
        let window = PageWindow::new(Some(page), Some(2));
        let slice = MovieRepo::list_filtered(&pool, &filter, window).await.unwrap();

        let start = window.offset() as usize;
        let end = (start + 2).min(full.movies.len());
        let expected: Vec<i64> = full.movies[start..end].iter().map(|m| m.id).collect();
        let got: Vec<i64> = slice.movies.iter().map(|m| m.id).collect();

        assert_eq!(got, expected, "page {page}");
        assert_eq!(slice.total_count, 5);
        assert_eq!(slice.page, page);
        assert_eq!(slice.limit, 2);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_genre_filter_keeps_all_genres_in_row(pool: PgPool) {
    seed_catalog(&pool).await;

    let filter = MovieListFilter {
        genre: Some("Comedy".into()),
        ..Default::default()
    };
    let page = MovieRepo::list_filtered(&pool, &filter, everything())
        .await
        .unwrap();

    assert_eq!(page.movies.len(), 1);
    let reply = &page.movies[0];
    assert_eq!(reply.title, "Reply 1988");
    assert_eq!(reply.genres.as_deref(), Some("Comedy, Drama"));
    assert_eq!(reply.countries.as_deref(), Some("South Korea"));
    assert_eq!(reply.status.as_deref(), Some("Completed"));
    assert_eq!(reply.availability, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movies_without_associations_are_listed(pool: PgPool) {
    seed_catalog(&pool).await;

    let filter = MovieListFilter {
        search: Some("moving".into()),
        ..Default::default()
    };
    let page = MovieRepo::list_filtered(&pool, &filter, everything())
        .await
        .unwrap();

    assert_eq!(page.movies.len(), 1);
    assert_eq!(page.movies[0].genres, None);
    assert_eq!(page.movies[0].countries, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_year_range_is_inclusive(pool: PgPool) {
    seed_catalog(&pool).await;

    let filter = MovieListFilter {
        year_range: Some(YearRange { start: 2013, end: 2015 }),
        sort: Some(SortOrder::Asc),
        ..Default::default()
    };
    let page = MovieRepo::list_filtered(&pool, &filter, everything())
        .await
        .unwrap();

    let titles: Vec<&str> = page.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Hanzawa Naoki", "Reply 1988"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_hides_unpublished_movies(pool: PgPool) {
    seed_catalog(&pool).await;
    let pending = DramaRepo::create(&pool, &drama("Hidden", 2021)).await.unwrap();

    assert!(MovieRepo::find_published_detail(&pool, pending.movie_id)
        .await
        .unwrap()
        .is_none());

    MovieRepo::set_status(&pool, pending.movie_id, MovieStatus::Published)
        .await
        .unwrap();
    let detail = MovieRepo::find_published_detail(&pool, pending.movie_id)
        .await
        .unwrap()
        .expect("published movie should be visible");
    assert_eq!(detail.title, "Hidden");
    assert!(detail.genres.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_featured_comes_from_latest_year(pool: PgPool) {
    seed_catalog(&pool).await;

    let featured = MovieRepo::featured(&pool, 10).await.unwrap();
    let titles: Vec<&str> = featured.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Moving"]);

    assert_eq!(
        MovieRepo::release_year_bounds(&pool).await.unwrap(),
        Some((2009, 2023))
    );
}
