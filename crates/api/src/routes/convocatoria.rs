//! Route definitions for the `/convocatorias` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::convocatoria;
use crate::state::AppState;

/// Routes mounted at `/convocatorias`.
///
/// ```text
/// GET    /                 -> list (paginated)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/proyectos   -> projects submitted to the call
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(convocatoria::list).post(convocatoria::create))
        .route(
            "/{id}",
            get(convocatoria::get_by_id)
                .put(convocatoria::update)
                .delete(convocatoria::delete),
        )
        .route("/{id}/proyectos", get(convocatoria::list_proyectos))
}
