//! User entity model and DTOs.

use cinedex_core::status::AccountStatus;
use cinedex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// `None` for accounts that only ever signed in through Google.
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub profile_picture: Option<String>,
    pub role: String,
    pub status_account: i16,
    pub email_confirmed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Decoded account status. Out-of-range codes are treated as deleted.
    pub fn account_status(&self) -> AccountStatus {
        AccountStatus::try_from(self.status_account).unwrap_or(AccountStatus::Deleted)
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub profile_picture: Option<String>,
    pub status_account: i16,
    pub email_confirmed: bool,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            profile_picture: user.profile_picture.clone(),
            status_account: user.status_account,
            email_confirmed: user.email_confirmed,
            created_at: user.created_at,
        }
    }
}

/// DTO for inserting a user. The password is already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub profile_picture: Option<String>,
    pub email_confirmed: bool,
}

/// DTO for updating a user. `None` fields are left unchanged.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub profile_picture: Option<String>,
    pub password_hash: Option<String>,
}
