//! Aggregate figures for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Row counts shown on the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub movie_count: i64,
    pub genre_count: i64,
    pub country_count: i64,
    pub award_count: i64,
}

/// Movies and distinct genres released per decade.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DecadeStat {
    pub decade: i32,
    pub movie_count: i64,
    pub genre_count: i64,
}
