//! Route definitions for the `/admin` resource (user management).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::usuario_admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /usuarios                       -> list (paginated)
/// POST   /usuarios                       -> create
/// GET    /usuarios/{id}                  -> get_by_id
/// PUT    /usuarios/{id}                  -> update
/// DELETE /usuarios/{id}                  -> deactivate (estado -> Inactivo)
/// POST   /usuarios/{id}/reset-password   -> reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/usuarios",
            get(usuario_admin::list).post(usuario_admin::create),
        )
        .route(
            "/usuarios/{id}",
            get(usuario_admin::get_by_id)
                .put(usuario_admin::update)
                .delete(usuario_admin::deactivate),
        )
        .route(
            "/usuarios/{id}/reset-password",
            post(usuario_admin::reset_password),
        )
}
