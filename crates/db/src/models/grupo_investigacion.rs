//! Grupo de investigación entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A research group row from the `grupos_investigacion` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GrupoInvestigacion {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Classification category (e.g. MinCiencias A1/A/B/C).
    pub categoria: Option<String>,
    /// The group leader; a user with the `lider` role.
    pub lider_id: Option<DbId>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new research group.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGrupoInvestigacion {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria: Option<String>,
    pub lider_id: Option<DbId>,
    /// Defaults to 1 (Activo) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing research group. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGrupoInvestigacion {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub categoria: Option<String>,
    pub lider_id: Option<DbId>,
    pub estado_id: Option<DbId>,
}
