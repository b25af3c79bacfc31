//! Evaluación entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An evaluation row from the `evaluaciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Evaluacion {
    pub id: DbId,
    pub proyecto_id: DbId,
    /// The evaluating user (internal or external evaluator).
    pub evaluador_id: Option<DbId>,
    /// Overall concept (e.g. "favorable", "no favorable").
    pub concepto: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_evaluacion: Option<Timestamp>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new evaluation. The project comes from the URL
/// path; the evaluator from the request identity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvaluacion {
    pub concepto: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_evaluacion: Option<Timestamp>,
    /// Defaults to 3 (Pendiente) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing evaluation. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvaluacion {
    pub concepto: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_evaluacion: Option<Timestamp>,
    pub estado_id: Option<DbId>,
}
