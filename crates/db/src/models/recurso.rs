//! Recurso (project resource) entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project resource row from the `recursos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recurso {
    pub id: DbId,
    pub proyecto_id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Resource kind (e.g. "humano", "equipo", "financiero").
    pub tipo: Option<String>,
    /// Budgeted amount in whole pesos.
    pub monto: Option<i64>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new resource. The project comes from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecurso {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub tipo: Option<String>,
    pub monto: Option<i64>,
    /// Defaults to 1 (Activo) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing resource. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecurso {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub tipo: Option<String>,
    pub monto: Option<i64>,
    pub estado_id: Option<DbId>,
}
