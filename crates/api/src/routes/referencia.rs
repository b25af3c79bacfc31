//! Route definitions for the reference-data resources (`/roles`,
//! `/estados`).

use axum::routing::get;
use axum::Router;

use crate::handlers::{estado, rol};
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET /          -> list
/// GET /{id}      -> get_by_id
/// PUT /{id}      -> update (descripcion only, admin)
/// ```
pub fn roles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(rol::list))
        .route("/{id}", get(rol::get_by_id).put(rol::update))
}

/// Routes mounted at `/estados` (read-only).
///
/// ```text
/// GET /          -> list
/// GET /{id}      -> get_by_id
/// ```
pub fn estados_router() -> Router<AppState> {
    Router::new()
        .route("/", get(estado::list))
        .route("/{id}", get(estado::get_by_id))
}
