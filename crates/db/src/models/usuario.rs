//! Usuario entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `usuarios` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UsuarioResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub nombre: String,
    pub correo: String,
    pub contrasena_hash: String,
    pub telefono: Option<String>,
    pub rol_id: DbId,
    pub estado_id: DbId,
    pub ultima_sesion: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioResponse {
    pub id: DbId,
    pub nombre: String,
    pub correo: String,
    pub telefono: Option<String>,
    /// Resolved role wire name (e.g. `"admin"`, `"investigador"`).
    pub rol: String,
    pub rol_id: DbId,
    pub estado_id: DbId,
    pub ultima_sesion: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUsuario {
    pub nombre: String,
    pub correo: String,
    pub contrasena_hash: String,
    pub telefono: Option<String>,
    pub rol_id: DbId,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUsuario {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub rol_id: Option<DbId>,
    pub estado_id: Option<DbId>,
}
