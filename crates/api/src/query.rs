//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules
//! are extracted here to avoid duplication.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Used by any handler that supports paginated listing. Values are
/// clamped in the repository layer.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for the notifications listing.
#[derive(Debug, Deserialize)]
pub struct NotificacionParams {
    #[serde(default)]
    pub solo_no_leidas: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
