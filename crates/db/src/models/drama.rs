//! Request and outcome types for the composite "drama" writer.
//!
//! A drama submission is one movie row plus the names of its genres, cast,
//! awards and country. Names are resolved to ids inside the write
//! transaction; see [`crate::repositories::DramaRepo`].

use cinedex_core::catalog::NameList;
use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One cast entry: either `{"name": .., "role": ..}` or a bare actor name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CastEntry {
    Credit {
        name: String,
        #[serde(default)]
        role: Option<String>,
    },
    Name(String),
}

/// Cast as sent by clients: a JSON array or a comma-separated string of names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CastList {
    Many(Vec<CastEntry>),
    Joined(String),
}

impl Default for CastList {
    fn default() -> Self {
        CastList::Many(Vec::new())
    }
}

/// A normalised cast credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastCredit {
    pub name: String,
    pub role: Option<String>,
}

impl CastList {
    /// Trimmed, non-empty credits, one per actor name (first occurrence wins).
    pub fn normalize(&self) -> Vec<CastCredit> {
        let raw: Vec<(String, Option<String>)> = match self {
            CastList::Many(entries) => entries
                .iter()
                .map(|e| match e {
                    CastEntry::Credit { name, role } => (name.clone(), role.clone()),
                    CastEntry::Name(name) => (name.clone(), None),
                })
                .collect(),
            CastList::Joined(joined) => joined.split(',').map(|n| (n.to_string(), None)).collect(),
        };

        let mut out: Vec<CastCredit> = Vec::new();
        for (name, role) in raw {
            let name = name.trim();
            if name.is_empty() || out.iter().any(|c| c.name == name) {
                continue;
            }
            let role = role
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty());
            out.push(CastCredit {
                name: name.to_string(),
                role,
            });
        }
        out
    }
}

/// Movie fields plus association names submitted from the admin form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DramaInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub alt_title: Option<String>,
    #[validate(range(min = 1800, max = 3000, message = "release_year must be a plausible year"))]
    pub release_year: i32,
    #[validate(range(min = 0.0, max = 10.0, message = "imdb_score must be between 0 and 10"))]
    pub imdb_score: Option<f64>,
    pub synopsis: Option<String>,
    #[serde(default, rename = "view", alias = "view_count")]
    pub view_count: Option<i64>,
    #[serde(default, rename = "posterUrl", alias = "poster")]
    pub poster: Option<String>,
    #[serde(default, rename = "backgroundUrl", alias = "background")]
    pub background: Option<String>,
    pub trailer: Option<String>,
    pub director: Option<String>,
    /// Release status name from the `status` lookup table.
    pub status: Option<String>,
    /// Platform name from the `availability` lookup table.
    pub availability: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub genres: NameList,
    #[serde(default)]
    pub actors: CastList,
    #[serde(default)]
    pub awards: NameList,
}

/// Update payload: the movie id alongside the full drama body.
#[derive(Debug, Clone, Deserialize)]
pub struct DramaUpdate {
    pub id: DbId,
    #[serde(flatten)]
    pub drama: DramaInput,
}

/// Names that did not match any live row and were therefore not linked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnresolvedRefs {
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub awards: Vec<String>,
    pub country: Option<String>,
    pub status: Option<String>,
    pub availability: Option<String>,
}

impl UnresolvedRefs {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.actors.is_empty()
            && self.awards.is_empty()
            && self.country.is_none()
            && self.status.is_none()
            && self.availability.is_none()
    }
}

/// Result of a composite write.
#[derive(Debug, Clone, Serialize)]
pub struct DramaOutcome {
    pub movie_id: DbId,
    pub unresolved: UnresolvedRefs,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DramaInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn form_field_names_are_accepted() {
        let input = parse(
            r#"{"title":"Signal","release_year":2016,"view":42,
                "posterUrl":"p.jpg","backgroundUrl":"b.jpg"}"#,
        );
        assert_eq!(input.view_count, Some(42));
        assert_eq!(input.poster.as_deref(), Some("p.jpg"));
        assert_eq!(input.background.as_deref(), Some("b.jpg"));
        assert_eq!(input.genres, NameList::default());
    }

    #[test]
    fn cast_accepts_objects_and_bare_names() {
        let input = parse(
            r#"{"title":"Signal","release_year":2016,
                "actors":[{"name":"Kim Hye-soo","role":"Cha Soo-hyun"}, "Lee Je-hoon", {"name":" Kim Hye-soo "}]}"#,
        );
        assert_eq!(
            input.actors.normalize(),
            vec![
                CastCredit {
                    name: "Kim Hye-soo".into(),
                    role: Some("Cha Soo-hyun".into()),
                },
                CastCredit {
                    name: "Lee Je-hoon".into(),
                    role: None,
                },
            ]
        );
    }

    #[test]
    fn joined_cast_string_is_split() {
        let cast = CastList::Joined("A, B,,A".into());
        let names: Vec<String> = cast.normalize().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn update_payload_flattens_drama_fields() {
        let update: DramaUpdate = serde_json::from_str(
            r#"{"id":7,"title":"Signal","release_year":2016,"genres":"Thriller,Crime"}"#,
        )
        .unwrap();
        assert_eq!(update.id, 7);
        assert_eq!(update.drama.genres.normalize(), vec!["Thriller", "Crime"]);
    }

    #[test]
    fn blank_title_fails_validation() {
        let input = parse(r#"{"title":"","release_year":2016}"#);
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_report_is_empty() {
        assert!(UnresolvedRefs::default().is_empty());
    }
}
