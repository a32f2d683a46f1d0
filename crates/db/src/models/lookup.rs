//! Read-only lookup tables (`status`, `availability`) and the shared
//! `{id, name}` shape used by filter dropdowns.

use cinedex_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A generic `{id, name}` pair.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct NamedRef {
    pub id: DbId,
    pub name: String,
}

/// A row from the `availability` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Platform {
    pub id: DbId,
    pub platform_name: String,
}
