//! Handlers for the `/estados` reference resource (read-only).

use axum::extract::{Path, State};
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::estado::Estado;
use pcg_db::repositories::EstadoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /api/v1/estados
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Estado>>> {
    let estados = EstadoRepo::list(&state.pool).await?;
    Ok(Json(estados))
}

/// GET /api/v1/estados/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Estado>> {
    let estado = EstadoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Estado",
            id,
        }))?;
    Ok(Json(estado))
}
