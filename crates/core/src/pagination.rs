//! Page/limit pagination helpers.

/// Default number of movies per listing page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of movies per listing page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// A resolved 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Build a window from raw query values, applying defaults and bounds.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            limit: clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
        }
    }

    /// Row offset of the first item on this page: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}
