//! Handlers for the `/grupos-investigacion` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::grupo_investigacion::{
    CreateGrupoInvestigacion, GrupoInvestigacion, UpdateGrupoInvestigacion,
};
use pcg_db::repositories::GrupoInvestigacionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireGestion};
use crate::state::AppState;

/// POST /api/v1/grupos-investigacion
pub async fn create(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Json(input): Json<CreateGrupoInvestigacion>,
) -> AppResult<(StatusCode, Json<GrupoInvestigacion>)> {
    let grupo = GrupoInvestigacionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(grupo)))
}

/// GET /api/v1/grupos-investigacion
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<GrupoInvestigacion>>> {
    let grupos = GrupoInvestigacionRepo::list(&state.pool).await?;
    Ok(Json(grupos))
}

/// GET /api/v1/grupos-investigacion/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<GrupoInvestigacion>> {
    let grupo = GrupoInvestigacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GrupoInvestigacion",
            id,
        }))?;
    Ok(Json(grupo))
}

/// PUT /api/v1/grupos-investigacion/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGrupoInvestigacion>,
) -> AppResult<Json<GrupoInvestigacion>> {
    let grupo = GrupoInvestigacionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GrupoInvestigacion",
            id,
        }))?;
    Ok(Json(grupo))
}

/// DELETE /api/v1/grupos-investigacion/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GrupoInvestigacionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GrupoInvestigacion",
            id,
        }))
    }
}
