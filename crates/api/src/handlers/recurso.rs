//! Handlers for the project-scoped `/proyectos/{proyecto_id}/recursos`
//! resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::recurso::{CreateRecurso, Recurso, UpdateRecurso};
use pcg_db::repositories::RecursoRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::proyecto::ensure_proyecto_exists;
use crate::middleware::rbac::{RequireAuth, RequireInvestigacion};
use crate::state::AppState;

/// POST /api/v1/proyectos/{proyecto_id}/recursos
pub async fn create(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path(proyecto_id): Path<DbId>,
    Json(input): Json<CreateRecurso>,
) -> AppResult<(StatusCode, Json<Recurso>)> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    if input.monto.is_some_and(|m| m < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "monto no puede ser negativo".into(),
        )));
    }
    let recurso = RecursoRepo::create(&state.pool, proyecto_id, &input).await?;
    Ok((StatusCode::CREATED, Json(recurso)))
}

/// GET /api/v1/proyectos/{proyecto_id}/recursos
pub async fn list_by_proyecto(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(proyecto_id): Path<DbId>,
) -> AppResult<Json<Vec<Recurso>>> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    let recursos = RecursoRepo::list_by_proyecto(&state.pool, proyecto_id).await?;
    Ok(Json(recursos))
}

/// GET /api/v1/proyectos/{proyecto_id}/recursos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Recurso>> {
    let recurso = RecursoRepo::find_by_id(&state.pool, proyecto_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recurso",
            id,
        }))?;
    Ok(Json(recurso))
}

/// PUT /api/v1/proyectos/{proyecto_id}/recursos/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateRecurso>,
) -> AppResult<Json<Recurso>> {
    let recurso = RecursoRepo::update(&state.pool, proyecto_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recurso",
            id,
        }))?;
    Ok(Json(recurso))
}

/// DELETE /api/v1/proyectos/{proyecto_id}/recursos/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = RecursoRepo::delete(&state.pool, proyecto_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Recurso",
            id,
        }))
    }
}
