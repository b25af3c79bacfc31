//! Route definitions for the institutional-structure resources
//! (`/facultades`, `/programas`, `/lineas-investigacion`,
//! `/grupos-investigacion`).

use axum::routing::get;
use axum::Router;

use crate::handlers::{facultad, grupo_investigacion, linea_investigacion, programa};
use crate::state::AppState;

/// Routes mounted at `/facultades`.
pub fn facultades_router() -> Router<AppState> {
    Router::new()
        .route("/", get(facultad::list).post(facultad::create))
        .route(
            "/{id}",
            get(facultad::get_by_id)
                .put(facultad::update)
                .delete(facultad::delete),
        )
}

/// Routes mounted at `/programas`.
pub fn programas_router() -> Router<AppState> {
    Router::new()
        .route("/", get(programa::list).post(programa::create))
        .route(
            "/{id}",
            get(programa::get_by_id)
                .put(programa::update)
                .delete(programa::delete),
        )
}

/// Routes mounted at `/lineas-investigacion`.
pub fn lineas_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(linea_investigacion::list).post(linea_investigacion::create),
        )
        .route(
            "/{id}",
            get(linea_investigacion::get_by_id)
                .put(linea_investigacion::update)
                .delete(linea_investigacion::delete),
        )
}

/// Routes mounted at `/grupos-investigacion`.
pub fn grupos_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(grupo_investigacion::list).post(grupo_investigacion::create),
        )
        .route(
            "/{id}",
            get(grupo_investigacion::get_by_id)
                .put(grupo_investigacion::update)
                .delete(grupo_investigacion::delete),
        )
}
