//! Route definitions for the `/notificaciones` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::notificacion;
use crate::state::AppState;

/// Routes mounted at `/notificaciones`.
///
/// ```text
/// GET    /            -> list own (?solo_no_leidas, paginated)
/// POST   /            -> create (admin)
/// POST   /{id}/leer   -> mark read
/// DELETE /{id}        -> delete own
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notificacion::list).post(notificacion::create))
        .route("/{id}/leer", post(notificacion::marcar_leida))
        .route("/{id}", delete(notificacion::delete))
}
