use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notifications::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinedex_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Outgoing mail for confirmation and password-reset links.
    pub mailer: Arc<dyn Mailer>,
}
