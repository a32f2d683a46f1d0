//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching database rows
//! - `Deserialize` (+ `Validate`) DTOs for inserts and updates

pub mod actor;
pub mod award;
pub mod country;
pub mod dashboard;
pub mod drama;
pub mod genre;
pub mod lookup;
pub mod movie;
pub mod review;
pub mod user;
