//! Programa entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An academic program row from the `programas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Programa {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub facultad_id: Option<DbId>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new program.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrograma {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub facultad_id: Option<DbId>,
    /// Defaults to 1 (Activo) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing program. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrograma {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub facultad_id: Option<DbId>,
    pub estado_id: Option<DbId>,
}
