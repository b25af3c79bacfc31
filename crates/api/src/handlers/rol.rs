//! Handlers for the `/roles` reference resource.
//!
//! Role identity is seeded and immutable; only the description can be
//! updated, and only by an admin.

use axum::extract::{Path, State};
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::rol::{Rol, UpdateRol};
use pcg_db::repositories::RolRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Rol>>> {
    let roles = RolRepo::list(&state.pool).await?;
    Ok(Json(roles))
}

/// GET /api/v1/roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rol>> {
    let rol = RolRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Rol", id }))?;
    Ok(Json(rol))
}

/// PUT /api/v1/roles/{id}
///
/// Update a role's description.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRol>,
) -> AppResult<Json<Rol>> {
    let rol = RolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Rol", id }))?;
    Ok(Json(rol))
}
