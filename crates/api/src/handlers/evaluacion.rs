//! Handlers for the project-scoped `/proyectos/{proyecto_id}/evaluaciones`
//! resource.
//!
//! Writes require evaluación (admin or one of the evaluator roles);
//! reads require any authenticated user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::evaluacion::{CreateEvaluacion, Evaluacion, UpdateEvaluacion};
use pcg_db::repositories::EvaluacionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::proyecto::ensure_proyecto_exists;
use crate::middleware::rbac::{RequireAuth, RequireEvaluacion};
use crate::state::AppState;

/// POST /api/v1/proyectos/{proyecto_id}/evaluaciones
///
/// The evaluator is taken from the request identity.
pub async fn create(
    State(state): State<AppState>,
    RequireEvaluacion(user): RequireEvaluacion,
    Path(proyecto_id): Path<DbId>,
    Json(input): Json<CreateEvaluacion>,
) -> AppResult<(StatusCode, Json<Evaluacion>)> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    let evaluacion = EvaluacionRepo::create(&state.pool, proyecto_id, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(evaluacion)))
}

/// GET /api/v1/proyectos/{proyecto_id}/evaluaciones
pub async fn list_by_proyecto(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(proyecto_id): Path<DbId>,
) -> AppResult<Json<Vec<Evaluacion>>> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    let evaluaciones = EvaluacionRepo::list_by_proyecto(&state.pool, proyecto_id).await?;
    Ok(Json(evaluaciones))
}

/// GET /api/v1/proyectos/{proyecto_id}/evaluaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Evaluacion>> {
    let evaluacion = EvaluacionRepo::find_by_id(&state.pool, proyecto_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Evaluacion",
            id,
        }))?;
    Ok(Json(evaluacion))
}

/// PUT /api/v1/proyectos/{proyecto_id}/evaluaciones/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEvaluacion(_user): RequireEvaluacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateEvaluacion>,
) -> AppResult<Json<Evaluacion>> {
    let evaluacion = EvaluacionRepo::update(&state.pool, proyecto_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Evaluacion",
            id,
        }))?;
    Ok(Json(evaluacion))
}

/// DELETE /api/v1/proyectos/{proyecto_id}/evaluaciones/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEvaluacion(_user): RequireEvaluacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = EvaluacionRepo::delete(&state.pool, proyecto_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Evaluacion",
            id,
        }))
    }
}
