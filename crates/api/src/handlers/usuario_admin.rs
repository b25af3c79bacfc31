//! Handlers for the `/admin/usuarios` resource (user management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pcg_core::error::CoreError;
use pcg_core::types::DbId;
use pcg_db::models::usuario::{CreateUsuario, UpdateUsuario, UsuarioResponse};
use pcg_db::repositories::UsuarioRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::auth::{usuario_to_response, MIN_PASSWORD_LENGTH};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::Page;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/usuarios`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,
    #[validate(email)]
    pub correo: String,
    pub contrasena: String,
    pub telefono: Option<String>,
    pub rol_id: DbId,
}

/// Request body for `PUT /admin/usuarios/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUsuarioRequest {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub rol_id: Option<DbId>,
    pub estado_id: Option<DbId>,
}

/// Request body for `POST /admin/usuarios/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub contrasena_nueva: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/usuarios
///
/// Create a new user. Validates the payload, checks password strength,
/// hashes it, and returns a safe [`UsuarioResponse`] with 201 Created.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUsuarioRequest>,
) -> AppResult<(StatusCode, Json<UsuarioResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    validate_password_strength(&input.contrasena, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.contrasena)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUsuario {
        nombre: input.nombre,
        correo: input.correo,
        contrasena_hash: hashed,
        telefono: input.telefono,
        rol_id: input.rol_id,
    };

    let usuario = UsuarioRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(usuario_to_response(&usuario)?)))
}

/// GET /api/v1/admin/usuarios
///
/// List users with resolved role names, paginated.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Page<UsuarioResponse>>> {
    let usuarios = UsuarioRepo::list_paged(&state.pool, params.limit, params.offset).await?;
    let total_elements = UsuarioRepo::count(&state.pool).await?;

    let content = usuarios
        .iter()
        .map(usuario_to_response)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Json(Page {
        content,
        total_elements,
    }))
}

/// GET /api/v1/admin/usuarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UsuarioResponse>> {
    let usuario = UsuarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Usuario",
            id,
        }))?;

    Ok(Json(usuario_to_response(&usuario)?))
}

/// PUT /api/v1/admin/usuarios/{id}
///
/// Update a user's profile fields (not the password).
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUsuarioRequest>,
) -> AppResult<Json<UsuarioResponse>> {
    let update_dto = UpdateUsuario {
        nombre: input.nombre,
        correo: input.correo,
        telefono: input.telefono,
        rol_id: input.rol_id,
        estado_id: input.estado_id,
    };

    let usuario = UsuarioRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Usuario",
            id,
        }))?;

    Ok(Json(usuario_to_response(&usuario)?))
}

/// DELETE /api/v1/admin/usuarios/{id}
///
/// Soft-deactivate: moves the user's estado to Inactivo. Users are
/// never hard-deleted in the normal flow.
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = UsuarioRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Usuario",
            id,
        }))
    }
}

/// POST /api/v1/admin/usuarios/{id}/reset-password
///
/// Set a new password for a user without knowing the old one.
/// Returns 204 No Content.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.contrasena_nueva, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.contrasena_nueva)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UsuarioRepo::update_password(&state.pool, id, &hashed).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Usuario",
            id,
        }))
    }
}
