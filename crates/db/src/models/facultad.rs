//! Facultad entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A faculty row from the `facultades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Facultad {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new faculty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFacultad {
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Defaults to 1 (Activo) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing faculty. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFacultad {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub estado_id: Option<DbId>,
}
