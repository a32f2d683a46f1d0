//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- session tokens and single-purpose email-link tokens.
//! - [`cookie`] -- the HttpOnly cookie carrying the session token.

pub mod cookie;
pub mod jwt;
pub mod password;
