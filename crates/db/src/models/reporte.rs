//! Reporte entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A report row from the `reportes` table.
///
/// Approval is a one-way flag stamped with the approving user and
/// timestamp; see the `aprobar` handler.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reporte {
    pub id: DbId,
    pub proyecto_id: Option<DbId>,
    pub titulo: String,
    pub descripcion: Option<String>,
    /// Report cadence (e.g. "semanal", "mensual", "final").
    pub tipo_reporte: String,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
    pub creado_por_id: DbId,
    pub aprobado: bool,
    pub aprobado_por_id: Option<DbId>,
    pub fecha_aprobacion: Option<Timestamp>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new report. The author comes from the request
/// identity, never the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReporte {
    pub proyecto_id: Option<DbId>,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub tipo_reporte: String,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
    /// Defaults to 3 (Pendiente) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing report. All fields are optional;
/// approval fields are managed by the `aprobar` operation instead.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReporte {
    pub proyecto_id: Option<DbId>,
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub tipo_reporte: Option<String>,
    pub fecha_inicio: Option<Timestamp>,
    pub fecha_fin: Option<Timestamp>,
    pub estado_id: Option<DbId>,
}
