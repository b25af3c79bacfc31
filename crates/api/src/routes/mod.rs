pub mod admin;
pub mod auth;
pub mod convocatoria;
pub mod estructura;
pub mod health;
pub mod notificacion;
pub mod proyecto;
pub mod referencia;
pub mod reporte;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public, form-encoded)
/// /auth/me                                         current profile
/// /auth/password                                   change own password
///
/// /admin/usuarios                                  list, create (admin only)
/// /admin/usuarios/{id}                             get, update, deactivate
/// /admin/usuarios/{id}/reset-password              reset password
///
/// /roles                                           list; /{id} get, update
/// /estados                                         list; /{id} get (read-only)
///
/// /facultades                                      list, create; /{id} get, update, delete
/// /programas                                       list, create; /{id} get, update, delete
/// /lineas-investigacion                            list, create; /{id} get, update, delete
/// /grupos-investigacion                            list, create; /{id} get, update, delete
///
/// /convocatorias                                   list, create
/// /convocatorias/{id}                              get, update, delete
/// /convocatorias/{id}/proyectos                    projects in the call
///
/// /proyectos                                       list, create
/// /proyectos/{id}                                  get, update, delete
/// /proyectos/{proyecto_id}/cronogramas[/{id}]      scoped CRUD
/// /proyectos/{proyecto_id}/recursos[/{id}]         scoped CRUD
/// /proyectos/{proyecto_id}/anexos[/{id}]           scoped CRUD
/// /proyectos/{proyecto_id}/evaluaciones[/{id}]     scoped CRUD
///
/// /reportes                                        list, create
/// /reportes/{id}                                   get, update, delete
/// /reportes/{id}/aprobar                           approve (gestión)
///
/// /notificaciones                                  list own, create (admin)
/// /notificaciones/{id}/leer                        mark read
/// /notificaciones/{id}                             delete own
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login, profile, password).
        .nest("/auth", auth::router())
        // Admin user management.
        .nest("/admin", admin::router())
        // Reference data.
        .nest("/roles", referencia::roles_router())
        .nest("/estados", referencia::estados_router())
        // Institutional structure.
        .nest("/facultades", estructura::facultades_router())
        .nest("/programas", estructura::programas_router())
        .nest("/lineas-investigacion", estructura::lineas_router())
        .nest("/grupos-investigacion", estructura::grupos_router())
        // Calls-for-proposals.
        .nest("/convocatorias", convocatoria::router())
        // Projects (also nests cronogramas, recursos, anexos, evaluaciones).
        .nest("/proyectos", proyecto::router())
        // Reports and approvals.
        .nest("/reportes", reporte::router())
        // Notifications.
        .nest("/notificaciones", notificacion::router())
}
