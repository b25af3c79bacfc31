//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Pagination envelope for large listings.
///
/// ```json
/// { "content": [...], "total_elements": 42 }
/// ```
///
/// Small reference listings (roles, estados, facultades) return bare
/// arrays instead.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub content: Vec<T>,
    pub total_elements: i64,
}
