//! Línea de investigación entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A research line row from the `lineas_investigacion` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LineaInvestigacion {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new research line.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLineaInvestigacion {
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Defaults to 1 (Activo) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing research line. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLineaInvestigacion {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub estado_id: Option<DbId>,
}
