//! Handlers for the `/reportes` resource.
//!
//! Writes require investigación; approval requires gestión. The author
//! always comes from the request identity.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::reporte::{CreateReporte, Reporte, UpdateReporte};
use pcg_db::repositories::ReporteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireGestion, RequireInvestigacion};
use crate::query::PaginationParams;
use crate::response::Page;
use crate::state::AppState;

/// POST /api/v1/reportes
pub async fn create(
    State(state): State<AppState>,
    RequireInvestigacion(user): RequireInvestigacion,
    Json(input): Json<CreateReporte>,
) -> AppResult<(StatusCode, Json<Reporte>)> {
    if input.fecha_fin < input.fecha_inicio {
        return Err(AppError::Core(CoreError::Validation(
            "fecha_fin no puede ser anterior a fecha_inicio".into(),
        )));
    }
    let reporte = ReporteRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(reporte)))
}

/// GET /api/v1/reportes
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Page<Reporte>>> {
    let content = ReporteRepo::list_paged(&state.pool, params.limit, params.offset).await?;
    let total_elements = ReporteRepo::count(&state.pool).await?;
    Ok(Json(Page {
        content,
        total_elements,
    }))
}

/// GET /api/v1/reportes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reporte>> {
    let reporte = ReporteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reporte",
            id,
        }))?;
    Ok(Json(reporte))
}

/// PUT /api/v1/reportes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReporte>,
) -> AppResult<Json<Reporte>> {
    let reporte = ReporteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reporte",
            id,
        }))?;
    Ok(Json(reporte))
}

/// POST /api/v1/reportes/{id}/aprobar
///
/// Approve a report: one-way, stamps the approving user and timestamp.
/// Approving an already-approved report is a 409.
pub async fn aprobar(
    State(state): State<AppState>,
    RequireGestion(user): RequireGestion,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reporte>> {
    match ReporteRepo::approve(&state.pool, id, user.user_id).await? {
        Some(reporte) => Ok(Json(reporte)),
        None => {
            // Distinguish missing from already-approved.
            match ReporteRepo::find_by_id(&state.pool, id).await? {
                Some(_) => Err(AppError::Core(CoreError::Conflict(
                    "El reporte ya fue aprobado".into(),
                ))),
                None => Err(AppError::Core(CoreError::NotFound {
                    entity: "Reporte",
                    id,
                })),
            }
        }
    }
}

/// DELETE /api/v1/reportes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReporteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Reporte",
            id,
        }))
    }
}
