//! Domain types and pure logic for the movie catalog.
//!
//! Nothing in this crate performs I/O, so it is shared by the database
//! layer, the HTTP layer and their tests alike.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod roles;
pub mod status;
pub mod types;
