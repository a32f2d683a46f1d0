//! Lifecycle status codes stored as `SMALLINT` columns.
//!
//! The numeric values are part of the schema contract (see the initial
//! migration) and must never be renumbered.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Publication lifecycle of a movie (`movies.status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieStatus {
    Trashed,
    Published,
    Rejected,
    PendingReview,
    PermanentlyDeleted,
}

impl MovieStatus {
    pub const fn as_i16(self) -> i16 {
        match self {
            MovieStatus::Trashed => 0,
            MovieStatus::Published => 1,
            MovieStatus::Rejected => 2,
            MovieStatus::PendingReview => 3,
            MovieStatus::PermanentlyDeleted => 4,
        }
    }
}

impl TryFrom<i16> for MovieStatus {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MovieStatus::Trashed),
            1 => Ok(MovieStatus::Published),
            2 => Ok(MovieStatus::Rejected),
            3 => Ok(MovieStatus::PendingReview),
            4 => Ok(MovieStatus::PermanentlyDeleted),
            other => Err(CoreError::Validation(format!(
                "Unknown movie status code: {other}"
            ))),
        }
    }
}

/// Account state of a user (`users.status_account`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Suspended,
    Deleted,
}

impl AccountStatus {
    pub const fn as_i16(self) -> i16 {
        match self {
            AccountStatus::Active => 1,
            AccountStatus::Suspended => 2,
            AccountStatus::Deleted => 3,
        }
    }
}

impl TryFrom<i16> for AccountStatus {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AccountStatus::Active),
            2 => Ok(AccountStatus::Suspended),
            3 => Ok(AccountStatus::Deleted),
            other => Err(CoreError::Validation(format!(
                "Unknown account status code: {other}"
            ))),
        }
    }
}

/// Moderation state of a review (`reviews.status`).
pub const REVIEW_PENDING: i16 = 0;
pub const REVIEW_APPROVED: i16 = 1;

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn movie_status_round_trips_through_code() {
        for status in [
            MovieStatus::Trashed,
            MovieStatus::Published,
            MovieStatus::Rejected,
            MovieStatus::PendingReview,
            MovieStatus::PermanentlyDeleted,
        ] {
            assert_eq!(MovieStatus::try_from(status.as_i16()).unwrap(), status);
        }
    }

    #[test]
    fn published_is_code_one() {
        assert_eq!(MovieStatus::Published.as_i16(), 1);
        assert_eq!(MovieStatus::PendingReview.as_i16(), 3);
    }

    #[test]
    fn unknown_movie_status_is_rejected() {
        assert_matches!(MovieStatus::try_from(9), Err(CoreError::Validation(_)));
    }

    #[test]
    fn account_status_codes() {
        assert_eq!(AccountStatus::Suspended.as_i16(), 2);
        assert_matches!(AccountStatus::try_from(3), Ok(AccountStatus::Deleted));
        assert_matches!(AccountStatus::try_from(0), Err(CoreError::Validation(_)));
    }
}
