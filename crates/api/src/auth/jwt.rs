//! JWT session tokens and single-purpose link tokens.
//!
//! Session tokens are HS256-signed JWTs containing a [`Claims`] payload.
//! Link tokens (email confirmation, password reset) carry [`LinkClaims`]
//! with an explicit purpose, so neither kind is accepted in place of the
//! other. A reset token also embeds a fingerprint of the password hash it
//! was issued against; once the password changes the token stops matching.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use cinedex_core::types::DbId;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's role name (`"admin"` or `"user"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// What an emailed link token may be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPurpose {
    ConfirmEmail,
    ResetPassword,
}

/// Claims of an emailed link token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LinkClaims {
    pub sub: DbId,
    pub purpose: LinkPurpose,
    /// Fingerprint of the password hash at issue time (reset tokens only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwd: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session token lifetime in minutes (default: 1440).
    pub access_token_expiry_mins: i64,
}

/// Default session token expiry in minutes (one day).
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 1440;

/// Lifetime of an email-confirmation link.
pub const CONFIRM_EMAIL_EXPIRY_MINS: i64 = 24 * 60;
/// Lifetime of a password-reset link.
pub const RESET_PASSWORD_EXPIRY_MINS: i64 = 5;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_SECRET`             | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS` | no       | `1440`  |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
        }
    }
}

/// Generate an HS256 session token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expiry_mins * 60;

    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Generate a link token for `purpose`, valid for `ttl_mins` minutes.
///
/// Pass the user's current password hash as `password_hash` to bind a reset
/// token to it.
pub fn generate_link_token(
    user_id: DbId,
    purpose: LinkPurpose,
    password_hash: Option<&str>,
    ttl_mins: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = LinkClaims {
        sub: user_id,
        purpose,
        pwd: password_hash.map(fingerprint),
        exp: now + ttl_mins * 60,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a link token and check that it was issued for `purpose`.
///
/// Returns `None` on a bad signature, expiry, malformed claims, or a purpose
/// mismatch.
pub fn validate_link_token(
    token: &str,
    purpose: LinkPurpose,
    config: &JwtConfig,
) -> Option<LinkClaims> {
    // Expiry is enforced without leeway; reset links live only minutes.
    let mut validation = Validation::default();
    validation.leeway = 0;

    let claims = decode::<LinkClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .ok()?
    .claims;

    (claims.purpose == purpose).then_some(claims)
}

/// Whether `claims` were issued against `password_hash`.
pub fn matches_password(claims: &LinkClaims, password_hash: Option<&str>) -> bool {
    claims.pwd.as_deref() == password_hash.map(fingerprint).as_deref()
}

/// SHA-256 hex digest of a stored password hash.
pub fn fingerprint(password_hash: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password_hash.as_bytes());
    format!("{:x}", hasher.finalize())
}
