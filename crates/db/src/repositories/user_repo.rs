//! Repository for the `users` table.

use cinedex_core::status::AccountStatus;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, google_id, profile_picture, role, \
                        status_account, email_confirmed, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new active user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users \
                (username, email, password_hash, role, profile_picture, email_confirmed, status_account) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(&input.profile_picture)
            .bind(input.email_confirmed)
            .bind(AccountStatus::Active.as_i16())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether any user already holds the username or the email.
    pub async fn username_or_email_taken(
        pool: &PgPool,
        username: &str,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await
    }

    /// List users that are not deleted, newest first.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE status_account <> $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(AccountStatus::Deleted.as_i16())
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                profile_picture = COALESCE($5, profile_picture),
                password_hash = COALESCE($6, password_hash)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.profile_picture)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Set the account status. Returns `true` if the row was updated.
    pub async fn set_account_status(
        pool: &PgPool,
        id: DbId,
        status: AccountStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET status_account = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_i16())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark the email address as confirmed. Returns `true` if the row was updated.
    pub async fn confirm_email(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET email_confirmed = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
