//! Cronograma (schedule item) entity model and DTOs.

use chrono::NaiveDate;
use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A schedule item row from the `cronogramas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cronograma {
    pub id: DbId,
    pub proyecto_id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new schedule item. The project comes from the
/// URL path, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCronograma {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    /// Defaults to 3 (Pendiente) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing schedule item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCronograma {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub estado_id: Option<DbId>,
}
