//! Convocatoria (call-for-proposals) entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A call-for-proposals row from the `convocatorias` table.
///
/// Two date windows: the submission window (`fecha_inicio` ..
/// `fecha_fin`) and the execution window for funded projects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Convocatoria {
    pub id: DbId,
    pub nombre: String,
    /// Call type (e.g. "interna", "externa").
    pub tipo: Option<String>,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
    pub fecha_inicio_ejecucion: Option<Timestamp>,
    pub fecha_fin_ejecucion: Option<Timestamp>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConvocatoria {
    pub nombre: String,
    pub tipo: Option<String>,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
    pub fecha_inicio_ejecucion: Option<Timestamp>,
    pub fecha_fin_ejecucion: Option<Timestamp>,
    /// Defaults to 3 (Pendiente) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing call. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateConvocatoria {
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub fecha_inicio: Option<Timestamp>,
    pub fecha_fin: Option<Timestamp>,
    pub fecha_inicio_ejecucion: Option<Timestamp>,
    pub fecha_fin_ejecucion: Option<Timestamp>,
    pub estado_id: Option<DbId>,
}
