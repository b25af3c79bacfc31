//! Handlers for the project-scoped `/proyectos/{proyecto_id}/cronogramas`
//! resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::cronograma::{CreateCronograma, Cronograma, UpdateCronograma};
use pcg_db::repositories::CronogramaRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::proyecto::ensure_proyecto_exists;
use crate::middleware::rbac::{RequireAuth, RequireInvestigacion};
use crate::state::AppState;

/// POST /api/v1/proyectos/{proyecto_id}/cronogramas
pub async fn create(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path(proyecto_id): Path<DbId>,
    Json(input): Json<CreateCronograma>,
) -> AppResult<(StatusCode, Json<Cronograma>)> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    if let (Some(inicio), Some(fin)) = (input.fecha_inicio, input.fecha_fin) {
        if fin < inicio {
            return Err(AppError::Core(CoreError::Validation(
                "fecha_fin no puede ser anterior a fecha_inicio".into(),
            )));
        }
    }
    let cronograma = CronogramaRepo::create(&state.pool, proyecto_id, &input).await?;
    Ok((StatusCode::CREATED, Json(cronograma)))
}

/// GET /api/v1/proyectos/{proyecto_id}/cronogramas
pub async fn list_by_proyecto(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(proyecto_id): Path<DbId>,
) -> AppResult<Json<Vec<Cronograma>>> {
    ensure_proyecto_exists(&state, proyecto_id).await?;
    let cronogramas = CronogramaRepo::list_by_proyecto(&state.pool, proyecto_id).await?;
    Ok(Json(cronogramas))
}

/// GET /api/v1/proyectos/{proyecto_id}/cronogramas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Cronograma>> {
    let cronograma = CronogramaRepo::find_by_id(&state.pool, proyecto_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cronograma",
            id,
        }))?;
    Ok(Json(cronograma))
}

/// PUT /api/v1/proyectos/{proyecto_id}/cronogramas/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCronograma>,
) -> AppResult<Json<Cronograma>> {
    let cronograma = CronogramaRepo::update(&state.pool, proyecto_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cronograma",
            id,
        }))?;
    Ok(Json(cronograma))
}

/// DELETE /api/v1/proyectos/{proyecto_id}/cronogramas/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path((proyecto_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = CronogramaRepo::delete(&state.pool, proyecto_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Cronograma",
            id,
        }))
    }
}
