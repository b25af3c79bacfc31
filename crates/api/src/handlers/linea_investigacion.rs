//! Handlers for the `/lineas-investigacion` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::linea_investigacion::{
    CreateLineaInvestigacion, LineaInvestigacion, UpdateLineaInvestigacion,
};
use pcg_db::repositories::LineaInvestigacionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireGestion};
use crate::state::AppState;

/// POST /api/v1/lineas-investigacion
pub async fn create(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Json(input): Json<CreateLineaInvestigacion>,
) -> AppResult<(StatusCode, Json<LineaInvestigacion>)> {
    let linea = LineaInvestigacionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(linea)))
}

/// GET /api/v1/lineas-investigacion
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<LineaInvestigacion>>> {
    let lineas = LineaInvestigacionRepo::list(&state.pool).await?;
    Ok(Json(lineas))
}

/// GET /api/v1/lineas-investigacion/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<LineaInvestigacion>> {
    let linea = LineaInvestigacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LineaInvestigacion",
            id,
        }))?;
    Ok(Json(linea))
}

/// PUT /api/v1/lineas-investigacion/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLineaInvestigacion>,
) -> AppResult<Json<LineaInvestigacion>> {
    let linea = LineaInvestigacionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LineaInvestigacion",
            id,
        }))?;
    Ok(Json(linea))
}

/// DELETE /api/v1/lineas-investigacion/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LineaInvestigacionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "LineaInvestigacion",
            id,
        }))
    }
}
