//! Catalog browsing helpers: year ranges, decade buckets, sort order, and
//! normalisation of user-supplied name lists.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Year ranges
// ---------------------------------------------------------------------------

/// An inclusive release-year range, as sent by the browsing UI in the
/// `yearRange` query parameter (`{"start":1990,"end":2000}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    /// Parse the JSON-encoded `yearRange` query parameter.
    ///
    /// Anything that is not a JSON object with integer `start` and `end`
    /// yields a validation error.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str::<YearRange>(raw)
            .map_err(|_| CoreError::Validation("Invalid yearRange format".into()))
    }
}

/// Width of a decade bucket in years.
const DECADE: i32 = 10;

/// Split `[min_year, max_year]` into decade buckets for the filter sidebar.
///
/// The first bucket starts at `min_year` rounded down to its decade; each
/// bucket is `{start, end: start + 10}` and buckets are emitted while
/// `start <= max_year`.
pub fn decade_buckets(min_year: i32, max_year: i32) -> Vec<YearRange> {
    let mut buckets = Vec::new();
    let mut start = min_year - min_year.rem_euclid(DECADE);
    while start <= max_year {
        buckets.push(YearRange {
            start,
            end: start + DECADE,
        });
        start += DECADE;
    }
    buckets
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Title sort direction for the movie listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `asc` / `desc` (case-insensitive). Empty input means "no sort".
    pub fn parse(raw: &str) -> Result<Option<Self>, CoreError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "asc" => Ok(Some(SortOrder::Asc)),
            "desc" => Ok(Some(SortOrder::Desc)),
            other => Err(CoreError::Validation(format!(
                "Invalid sort order '{other}', expected 'asc' or 'desc'"
            ))),
        }
    }

    pub const fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Name lists
// ---------------------------------------------------------------------------

/// A list of names that clients send either as a JSON array or as a single
/// comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    Many(Vec<String>),
    Joined(String),
}

impl Default for NameList {
    fn default() -> Self {
        NameList::Many(Vec::new())
    }
}

impl NameList {
    /// Flatten into trimmed, non-empty, de-duplicated names (first occurrence wins).
    pub fn normalize(&self) -> Vec<String> {
        match self {
            NameList::Many(items) => normalize_names(items.iter().map(String::as_str)),
            NameList::Joined(joined) => normalize_names(joined.split(',')),
        }
    }
}

/// Trim each name, drop empties, and remove duplicates while keeping order.
pub fn normalize_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let name = name.trim();
        if !name.is_empty() && !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}

/// Escape `LIKE` metacharacters so user input matches literally.
///
/// Pair with `ESCAPE '\'` in the SQL.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
