//! Handlers for the `/convocatorias` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::convocatoria::{Convocatoria, CreateConvocatoria, UpdateConvocatoria};
use pcg_db::models::proyecto::Proyecto;
use pcg_db::repositories::{ConvocatoriaRepo, ProyectoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireGestion};
use crate::query::PaginationParams;
use crate::response::Page;
use crate::state::AppState;

/// POST /api/v1/convocatorias
pub async fn create(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Json(input): Json<CreateConvocatoria>,
) -> AppResult<(StatusCode, Json<Convocatoria>)> {
    if input.fecha_fin < input.fecha_inicio {
        return Err(AppError::Core(CoreError::Validation(
            "fecha_fin no puede ser anterior a fecha_inicio".into(),
        )));
    }
    let convocatoria = ConvocatoriaRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(convocatoria)))
}

/// GET /api/v1/convocatorias
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Page<Convocatoria>>> {
    let content = ConvocatoriaRepo::list_paged(&state.pool, params.limit, params.offset).await?;
    let total_elements = ConvocatoriaRepo::count(&state.pool).await?;
    Ok(Json(Page {
        content,
        total_elements,
    }))
}

/// GET /api/v1/convocatorias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Convocatoria>> {
    let convocatoria = ConvocatoriaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Convocatoria",
            id,
        }))?;
    Ok(Json(convocatoria))
}

/// GET /api/v1/convocatorias/{id}/proyectos
///
/// The projects submitted to a call.
pub async fn list_proyectos(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Proyecto>>> {
    // 404 on an unknown call rather than an empty list.
    ConvocatoriaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Convocatoria",
            id,
        }))?;

    let proyectos = ProyectoRepo::list_by_convocatoria(&state.pool, id).await?;
    Ok(Json(proyectos))
}

/// PUT /api/v1/convocatorias/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateConvocatoria>,
) -> AppResult<Json<Convocatoria>> {
    let convocatoria = ConvocatoriaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Convocatoria",
            id,
        }))?;
    Ok(Json(convocatoria))
}

/// DELETE /api/v1/convocatorias/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireGestion(_user): RequireGestion,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ConvocatoriaRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Convocatoria",
            id,
        }))
    }
}
