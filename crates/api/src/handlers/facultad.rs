//! Handlers for the `/facultades` resource.
//!
//! Reads require any authenticated user; writes require gestión
//! (admin or lider).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::facultad::{CreateFacultad, Facultad, UpdateFacultad};
use pcg_db::repositories::FacultadRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireGestion};
use crate::state::AppState;

/// POST /api/v1/facultades
pub async fn create(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Json(input): Json<CreateFacultad>,
) -> AppResult<(StatusCode, Json<Facultad>)> {
    let facultad = FacultadRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(facultad)))
}

/// GET /api/v1/facultades
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Facultad>>> {
    let facultades = FacultadRepo::list(&state.pool).await?;
    Ok(Json(facultades))
}

/// GET /api/v1/facultades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Facultad>> {
    let facultad = FacultadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Facultad",
            id,
        }))?;
    Ok(Json(facultad))
}

/// PUT /api/v1/facultades/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFacultad>,
) -> AppResult<Json<Facultad>> {
    let facultad = FacultadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Facultad",
            id,
        }))?;
    Ok(Json(facultad))
}

/// DELETE /api/v1/facultades/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FacultadRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Facultad",
            id,
        }))
    }
}
