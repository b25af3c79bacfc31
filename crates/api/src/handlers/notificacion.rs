//! Handlers for the `/notificaciones` resource.
//!
//! Listing, marking read, and deleting operate on the authenticated
//! user's own rows only. Creation is an admin operation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::notificacion::{CreateNotificacion, Notificacion};
use pcg_db::repositories::NotificacionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::NotificacionParams;
use crate::response::Page;
use crate::state::AppState;

/// POST /api/v1/notificaciones
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateNotificacion>,
) -> AppResult<(StatusCode, Json<Notificacion>)> {
    let notificacion = NotificacionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(notificacion)))
}

/// GET /api/v1/notificaciones
///
/// The authenticated user's notifications, newest first. Supports
/// `?solo_no_leidas=true` and pagination.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<NotificacionParams>,
) -> AppResult<Json<Page<Notificacion>>> {
    let content = NotificacionRepo::list_for_usuario(
        &state.pool,
        user.user_id,
        params.solo_no_leidas,
        params.limit,
        params.offset,
    )
    .await?;
    let total_elements =
        NotificacionRepo::count_for_usuario(&state.pool, user.user_id, params.solo_no_leidas)
            .await?;

    Ok(Json(Page {
        content,
        total_elements,
    }))
}

/// POST /api/v1/notificaciones/{id}/leer
///
/// Mark one of the user's notifications as read. Returns 204.
pub async fn marcar_leida(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = NotificacionRepo::mark_read(&state.pool, user.user_id, id).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Notificacion",
            id,
        }))
    }
}

/// DELETE /api/v1/notificaciones/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NotificacionRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Notificacion",
            id,
        }))
    }
}
