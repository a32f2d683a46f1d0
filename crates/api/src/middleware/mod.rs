//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller identified by a Bearer token or the session cookie.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireAuth`] -- requires any authenticated user.

pub mod auth;
pub mod rbac;
