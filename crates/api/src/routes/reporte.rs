//! Route definitions for the `/reportes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reporte;
use crate::state::AppState;

/// Routes mounted at `/reportes`.
///
/// ```text
/// GET    /              -> list (paginated)
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/aprobar  -> aprobar (gestión)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reporte::list).post(reporte::create))
        .route(
            "/{id}",
            get(reporte::get_by_id)
                .put(reporte::update)
                .delete(reporte::delete),
        )
        .route("/{id}/aprobar", post(reporte::aprobar))
}
