//! Handlers for the `/proyectos` resource.
//!
//! Writes require investigación (admin, lider, or investigador).
//! When a create omits `responsable_id`, the authenticated user
//! becomes the responsible.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::proyecto::{CreateProyecto, Proyecto, UpdateProyecto};
use pcg_db::repositories::ProyectoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireInvestigacion};
use crate::query::PaginationParams;
use crate::response::Page;
use crate::state::AppState;

/// Request body for `POST /proyectos`, validated before hitting the
/// repository.
#[derive(Debug, serde::Deserialize, Validate)]
pub struct CreateProyectoRequest {
    #[validate(length(min = 1, max = 500))]
    pub titulo: String,
    pub resumen: Option<String>,
    pub objetivos: Option<String>,
    pub problematica: Option<String>,
    pub fecha_inicio: Option<chrono::NaiveDate>,
    pub convocatoria_id: Option<DbId>,
    pub grupo_investigacion_id: Option<DbId>,
    pub linea_investigacion_id: Option<DbId>,
    pub responsable_id: Option<DbId>,
    pub estado_id: Option<DbId>,
}

/// POST /api/v1/proyectos
pub async fn create(
    State(state): State<AppState>,
    RequireInvestigacion(user): RequireInvestigacion,
    Json(input): Json<CreateProyectoRequest>,
) -> AppResult<(StatusCode, Json<Proyecto>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let create_dto = CreateProyecto {
        titulo: input.titulo,
        resumen: input.resumen,
        objetivos: input.objetivos,
        problematica: input.problematica,
        fecha_inicio: input.fecha_inicio,
        convocatoria_id: input.convocatoria_id,
        grupo_investigacion_id: input.grupo_investigacion_id,
        linea_investigacion_id: input.linea_investigacion_id,
        responsable_id: Some(input.responsable_id.unwrap_or(user.user_id)),
        estado_id: input.estado_id,
    };

    let proyecto = ProyectoRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(proyecto)))
}

/// GET /api/v1/proyectos
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Page<Proyecto>>> {
    let content = ProyectoRepo::list_paged(&state.pool, params.limit, params.offset).await?;
    let total_elements = ProyectoRepo::count(&state.pool).await?;
    Ok(Json(Page {
        content,
        total_elements,
    }))
}

/// GET /api/v1/proyectos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Proyecto>> {
    let proyecto = ProyectoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    Ok(Json(proyecto))
}

/// PUT /api/v1/proyectos/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProyecto>,
) -> AppResult<Json<Proyecto>> {
    let proyecto = ProyectoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))?;
    Ok(Json(proyecto))
}

/// DELETE /api/v1/proyectos/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireInvestigacion(_user): RequireInvestigacion,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProyectoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id,
        }))
    }
}

/// Ensure a project exists before touching its children. Shared by the
/// nested cronograma/recurso/anexo/evaluación handlers.
pub(crate) async fn ensure_proyecto_exists(state: &AppState, proyecto_id: DbId) -> AppResult<()> {
    ProyectoRepo::find_by_id(&state.pool, proyecto_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proyecto",
            id: proyecto_id,
        }))?;
    Ok(())
}
