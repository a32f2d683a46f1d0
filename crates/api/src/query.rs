//! Query-string types shared by the catalog and admin handlers.

use cinedex_core::catalog::{SortOrder, YearRange};
use cinedex_core::error::CoreError;
use cinedex_core::pagination::PageWindow;
use cinedex_core::status::MovieStatus;
use cinedex_db::filter::MovieListFilter;
use serde::Deserialize;

/// Query parameters of the public movie listing (`GET /movies/movie`).
///
/// Parameter names follow the browsing UI (`yearRange`, `country_release`).
#[derive(Debug, Default, Deserialize)]
pub struct MovieListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// JSON object `{"start": .., "end": ..}`.
    #[serde(rename = "yearRange")]
    pub year_range: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub availability: Option<String>,
    #[serde(rename = "country_release")]
    pub country: Option<String>,
    pub awards: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl MovieListQuery {
    /// Validate the raw parameters and split them into a filter and a page
    /// window. Fails before any query runs.
    pub fn into_filter(self) -> Result<(MovieListFilter, PageWindow), CoreError> {
        let year_range = match self.year_range.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(YearRange::parse(raw)?),
        };
        let sort = match self.sort.as_deref() {
            None => None,
            Some(raw) => SortOrder::parse(raw)?,
        };

        let filter = MovieListFilter {
            year_range,
            search: self.search,
            genre: self.genre,
            status: self.status,
            availability: self.availability,
            country: self.country,
            award: self.awards,
            sort,
        };
        Ok((filter, PageWindow::new(self.page, self.limit)))
    }
}

/// `?q=` of the quick title search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// `?status=` of the admin movie table (numeric publication status).
#[derive(Debug, Deserialize)]
pub struct AdminMovieListQuery {
    pub status: Option<i16>,
}

impl AdminMovieListQuery {
    pub fn status(&self) -> Result<Option<MovieStatus>, CoreError> {
        self.status.map(MovieStatus::try_from).transpose()
    }
}
