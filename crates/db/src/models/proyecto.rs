//! Proyecto entity model and DTOs.

use chrono::NaiveDate;
use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A research project row from the `proyectos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proyecto {
    pub id: DbId,
    pub titulo: String,
    pub resumen: Option<String>,
    pub objetivos: Option<String>,
    pub problematica: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub convocatoria_id: Option<DbId>,
    pub grupo_investigacion_id: Option<DbId>,
    pub linea_investigacion_id: Option<DbId>,
    /// Responsible user (project lead).
    pub responsable_id: Option<DbId>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProyecto {
    pub titulo: String,
    pub resumen: Option<String>,
    pub objetivos: Option<String>,
    pub problematica: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub convocatoria_id: Option<DbId>,
    pub grupo_investigacion_id: Option<DbId>,
    pub linea_investigacion_id: Option<DbId>,
    pub responsable_id: Option<DbId>,
    /// Defaults to 3 (Pendiente) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProyecto {
    pub titulo: Option<String>,
    pub resumen: Option<String>,
    pub objetivos: Option<String>,
    pub problematica: Option<String>,
    pub fecha_inicio: Option<NaiveDate>,
    pub convocatoria_id: Option<DbId>,
    pub grupo_investigacion_id: Option<DbId>,
    pub linea_investigacion_id: Option<DbId>,
    pub responsable_id: Option<DbId>,
    pub estado_id: Option<DbId>,
}
