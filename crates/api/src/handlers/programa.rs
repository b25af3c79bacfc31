//! Handlers for the `/programas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::programa::{CreatePrograma, Programa, UpdatePrograma};
use pcg_db::repositories::ProgramaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireGestion};
use crate::state::AppState;

/// POST /api/v1/programas
pub async fn create(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Json(input): Json<CreatePrograma>,
) -> AppResult<(StatusCode, Json<Programa>)> {
    let programa = ProgramaRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(programa)))
}

/// GET /api/v1/programas
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Programa>>> {
    let programas = ProgramaRepo::list(&state.pool).await?;
    Ok(Json(programas))
}

/// GET /api/v1/programas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Programa>> {
    let programa = ProgramaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Programa",
            id,
        }))?;
    Ok(Json(programa))
}

/// PUT /api/v1/programas/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrograma>,
) -> AppResult<Json<Programa>> {
    let programa = ProgramaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Programa",
            id,
        }))?;
    Ok(Json(programa))
}

/// DELETE /api/v1/programas/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProgramaRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Programa",
            id,
        }))
    }
}
