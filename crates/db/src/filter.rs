//! Typed predicate builder for the public movie listing.
//!
//! Every active filter becomes one [`MovieClause`]. Rendering a slice of
//! clauses yields a single [`WhereClause`] (SQL text with `$n` placeholders
//! plus the matching bind values). The listing query and its COUNT query are
//! both built from the same `WhereClause`, so pagination totals always agree
//! with the rows actually listed.

use cinedex_core::catalog::{escape_like, SortOrder, YearRange};
use cinedex_core::status::MovieStatus;
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::Postgres;

/// Typed bind value for dynamically-built listing queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    SmallInt(i16),
    Int(i32),
    Text(String),
}

/// One filter predicate on the `movies m` row.
///
/// Associations that a movie can have several of (genres, countries, awards)
/// are tested with a membership sub-query instead of a join predicate, so the
/// listing's aggregated association columns still show every value the movie
/// has, not only the one that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieClause {
    /// `m.status` equals the given lifecycle code.
    Publication(MovieStatus),
    /// Inclusive release-year range.
    ReleasedBetween(YearRange),
    /// Case-insensitive substring match on the title.
    TitleContains(String),
    HasGenre(String),
    ReleasedInCountry(String),
    WonAward(String),
    /// Release status by display name (`status.name`).
    StatusNamed(String),
    /// Platform by display name (`availability.platform_name`).
    AvailableOn(String),
}

impl MovieClause {
    fn render(&self, binds: &mut Vec<BindValue>) -> String {
        match self {
            MovieClause::Publication(status) => {
                let p = push(binds, BindValue::SmallInt(status.as_i16()));
                format!("m.status = {p}")
            }
            MovieClause::ReleasedBetween(range) => {
                let start = push(binds, BindValue::Int(range.start));
                let end = push(binds, BindValue::Int(range.end));
                format!("m.release_year BETWEEN {start} AND {end}")
            }
            MovieClause::TitleContains(term) => {
                let p = push(binds, BindValue::Text(format!("%{}%", escape_like(term))));
                format!("m.title ILIKE {p} ESCAPE '\\'")
            }
            MovieClause::HasGenre(name) => {
                let p = push(binds, BindValue::Text(name.clone()));
                format!(
                    "m.id IN (SELECT mg.movie_id FROM movie_genres mg \
                     JOIN genres g ON g.id = mg.genre_id WHERE g.name = {p})"
                )
            }
            MovieClause::ReleasedInCountry(name) => {
                let p = push(binds, BindValue::Text(name.clone()));
                format!(
                    "m.id IN (SELECT mc.movie_id FROM movie_countries mc \
                     JOIN countries c ON c.id = mc.country_id WHERE c.country_name = {p})"
                )
            }
            MovieClause::WonAward(name) => {
                let p = push(binds, BindValue::Text(name.clone()));
                format!(
                    "m.id IN (SELECT ma.movie_id FROM movie_awards ma \
                     JOIN awards a ON a.id = ma.awards_id WHERE a.awards_name = {p})"
                )
            }
            MovieClause::StatusNamed(name) => {
                let p = push(binds, BindValue::Text(name.clone()));
                format!("s.name = {p}")
            }
            MovieClause::AvailableOn(name) => {
                let p = push(binds, BindValue::Text(name.clone()));
                format!("av.platform_name = {p}")
            }
        }
    }
}

/// Append a bind value and return its `$n` placeholder.
fn push(binds: &mut Vec<BindValue>, value: BindValue) -> String {
    binds.push(value);
    format!("${}", binds.len())
}

/// A rendered WHERE clause and its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    /// Empty when there are no clauses, otherwise starts with `WHERE `.
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl WhereClause {
    /// AND together all clauses.
    pub fn build(clauses: &[MovieClause]) -> Self {
        let mut binds = Vec::new();
        let conditions: Vec<String> = clauses.iter().map(|c| c.render(&mut binds)).collect();

        let sql = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        Self { sql, binds }
    }

    /// Index of the next free placeholder (for LIMIT / OFFSET).
    pub fn next_placeholder(&self) -> usize {
        self.binds.len() + 1
    }
}

/// Filter criteria accepted by the public movie listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieListFilter {
    pub year_range: Option<YearRange>,
    pub search: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub availability: Option<String>,
    pub country: Option<String>,
    pub award: Option<String>,
    pub sort: Option<SortOrder>,
}

impl MovieListFilter {
    /// Translate the filter into clauses. Only published movies are listed;
    /// blank strings count as "not provided".
    pub fn clauses(&self) -> Vec<MovieClause> {
        let mut clauses = vec![MovieClause::Publication(MovieStatus::Published)];

        if let Some(range) = self.year_range {
            clauses.push(MovieClause::ReleasedBetween(range));
        }
        if let Some(term) = non_blank(&self.search) {
            clauses.push(MovieClause::TitleContains(term));
        }
        if let Some(award) = non_blank(&self.award) {
            clauses.push(MovieClause::WonAward(award));
        }
        if let Some(status) = non_blank(&self.status) {
            clauses.push(MovieClause::StatusNamed(status));
        }
        if let Some(platform) = non_blank(&self.availability) {
            clauses.push(MovieClause::AvailableOn(platform));
        }
        if let Some(country) = non_blank(&self.country) {
            clauses.push(MovieClause::ReleasedInCountry(country));
        }
        if let Some(genre) = non_blank(&self.genre) {
            clauses.push(MovieClause::HasGenre(genre));
        }

        clauses
    }

    /// ORDER BY expression for the listing. Ties on title fall back to id so
    /// page boundaries are stable.
    pub fn order_by(&self) -> String {
        match self.sort {
            Some(order) => format!("m.title {}, m.id", order.as_sql()),
            None => "m.id".to_string(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    binds: &'q [BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for val in binds {
        match val {
            BindValue::SmallInt(v) => q = q.bind(*v),
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
pub fn bind_values_scalar<'q>(
    mut q: QueryScalar<'q, Postgres, i64, PgArguments>,
    binds: &'q [BindValue],
) -> QueryScalar<'q, Postgres, i64, PgArguments> {
    for val in binds {
        match val {
            BindValue::SmallInt(v) => q = q.bind(*v),
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause_list_renders_nothing() {
        let clause = WhereClause::build(&[]);
        assert_eq!(clause.sql, "");
        assert!(clause.binds.is_empty());
        assert_eq!(clause.next_placeholder(), 1);
    }

    #[test]
    fn default_filter_lists_only_published() {
        let clause = WhereClause::build(&MovieListFilter::default().clauses());
        assert_eq!(clause.sql, "WHERE m.status = $1");
        assert_eq!(clause.binds, vec![BindValue::SmallInt(1)]);
    }

    #[test]
    fn placeholders_are_numbered_in_bind_order() {
        let filter = MovieListFilter {
            year_range: Some(YearRange { start: 1990, end: 1999 }),
            search: Some("love".into()),
            ..Default::default()
        };
        let clause = WhereClause::build(&filter.clauses());

        assert_eq!(
            clause.sql,
            "WHERE m.status = $1 AND m.release_year BETWEEN $2 AND $3 \
             AND m.title ILIKE $4 ESCAPE '\\'"
        );
        assert_eq!(
            clause.binds,
            vec![
                BindValue::SmallInt(1),
                BindValue::Int(1990),
                BindValue::Int(1999),
                BindValue::Text("%love%".into()),
            ]
        );
        assert_eq!(clause.next_placeholder(), 5);
    }

    #[test]
    fn genre_uses_membership_subquery() {
        let filter = MovieListFilter {
            genre: Some("Drama".into()),
            ..Default::default()
        };
        let clause = WhereClause::build(&filter.clauses());

        assert!(clause.sql.contains("m.id IN (SELECT mg.movie_id FROM movie_genres mg"));
        assert!(clause.sql.ends_with("WHERE g.name = $2)"));
        assert_eq!(clause.binds[1], BindValue::Text("Drama".into()));
    }

    #[test]
    fn blank_filters_are_ignored() {
        let filter = MovieListFilter {
            genre: Some("   ".into()),
            award: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.clauses().len(), 1);
    }

    #[test]
    fn search_term_wildcards_are_literal() {
        let filter = MovieListFilter {
            search: Some("50%".into()),
            ..Default::default()
        };
        let clause = WhereClause::build(&filter.clauses());
        assert_eq!(clause.binds[1], BindValue::Text("%50\\%%".into()));
    }

    #[test]
    fn sort_order_breaks_ties_by_id() {
        let mut filter = MovieListFilter::default();
        assert_eq!(filter.order_by(), "m.id");

        filter.sort = Some(SortOrder::Desc);
        assert_eq!(filter.order_by(), "m.title DESC, m.id");
    }
}
