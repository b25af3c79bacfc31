//! Handlers for the project-scoped `/proyectos/{proyecto_id}/anexos`
//! resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::anexo::{Anexo, CreateAnexo, UpdateAnexo};
use pcg_db::repositories::AnexoRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::proyecto::ensure_proyecto_exists;
use crate::middleware::rbac::{RequireAuth, RequireInvestigacion};
use crate::state::AppState;

/// POST /api/v1/proyectos/{proyecto_id}/anexos
///
/// The uploader is taken from the request identity.
pub async fn create(
    State(state): State<AppState>,
    RequireInvestigacion(user): RequireInvestigacion,
    Path(proyecto_id): Path<DbId>,
    Json(input): Json<CreateAnexo>,
) -> AppResult<(StatusCode, Json<Anexo>)> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    let anexo = AnexoRepo::create(&state.pool, proyecto_id, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(anexo)))
}

/// GET /api/v1/proyectos/{proyecto_id}/anexos
pub async fn list_by_proyecto(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(proyecto_id): Path<DbId>,
) -> AppResult<Json<Vec<Anexo>>> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    let anexos = AnexoRepo::list_by_proyecto(&state.pool, proyecto_id).await?;
    Ok(Json(anexos))
}

/// GET /api/v1/proyectos/{proyecto_id}/anexos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Anexo>> {
    let anexo = AnexoRepo::find_by_id(&state.pool, proyecto_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Anexo", id }))?;
    Ok(Json(anexo))
}

/// PUT /api/v1/proyectos/{proyecto_id}/anexos/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateAnexo>,
) -> AppResult<Json<Anexo>> {
    let anexo = AnexoRepo::update(&state.pool, proyecto_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Anexo", id }))?;
    Ok(Json(anexo))
}

/// DELETE /api/v1/proyectos/{proyecto_id}/anexos/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = AnexoRepo::delete(&state.pool, proyecto_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Anexo", id }))
    }
}
