//! Route definitions for the `/proyectos` resource.
//!
//! Also nests the project-scoped children (cronogramas, recursos,
//! anexos, evaluaciones) under `/proyectos/{proyecto_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{anexo, cronograma, evaluacion, proyecto, recurso};
use crate::state::AppState;

/// Routes mounted at `/proyectos`.
///
/// ```text
/// GET    /                                       -> list (paginated)
/// POST   /                                       -> create
/// GET    /{id}                                   -> get_by_id
/// PUT    /{id}                                   -> update
/// DELETE /{id}                                   -> delete
///
/// GET    /{proyecto_id}/cronogramas              -> list_by_proyecto
/// POST   /{proyecto_id}/cronogramas              -> create
/// GET    /{proyecto_id}/cronogramas/{id}         -> get_by_id
/// PUT    /{proyecto_id}/cronogramas/{id}         -> update
/// DELETE /{proyecto_id}/cronogramas/{id}         -> delete
///
/// (same shape for /recursos, /anexos, /evaluaciones)
/// ```
pub fn router() -> Router<AppState> {
    let cronograma_routes = Router::new()
        .route(
            "/",
            get(cronograma::list_by_proyecto).post(cronograma::create),
        )
        .route(
            "/{id}",
            get(cronograma::get_by_id)
                .put(cronograma::update)
                .delete(cronograma::delete),
        );

    let recurso_routes = Router::new()
        .route("/", get(recurso::list_by_proyecto).post(recurso::create))
        .route(
            "/{id}",
            get(recurso::get_by_id)
                .put(recurso::update)
                .delete(recurso::delete),
        );

    let anexo_routes = Router::new()
        .route("/", get(anexo::list_by_proyecto).post(anexo::create))
        .route(
            "/{id}",
            get(anexo::get_by_id)
                .put(anexo::update)
                .delete(anexo::delete),
        );

    let evaluacion_routes = Router::new()
        .route(
            "/",
            get(evaluacion::list_by_proyecto).post(evaluacion::create),
        )
        .route(
            "/{id}",
            get(evaluacion::get_by_id)
                .put(evaluacion::update)
                .delete(evaluacion::delete),
        );

    Router::new()
        .route("/", get(proyecto::list).post(proyecto::create))
        .route(
            "/{id}",
            get(proyecto::get_by_id)
                .put(proyecto::update)
                .delete(proyecto::delete),
        )
        .nest("/{proyecto_id}/cronogramas", cronograma_routes)
        .nest("/{proyecto_id}/recursos", recurso_routes)
        .nest("/{proyecto_id}/anexos", anexo_routes)
        .nest("/{proyecto_id}/evaluaciones", evaluacion_routes)
}
