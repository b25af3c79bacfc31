//! Anexo (attachment) entity model and DTOs.
//!
//! Only the URL record is stored; file bytes live outside this system.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An attachment row from the `anexos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Anexo {
    pub id: DbId,
    pub proyecto_id: DbId,
    pub nombre: String,
    pub archivo_url: Option<String>,
    pub subido_por_id: Option<DbId>,
    pub estado_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new attachment. The project comes from the URL
/// path; the uploader from the request identity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnexo {
    pub nombre: String,
    pub archivo_url: Option<String>,
    /// Defaults to 1 (Activo) if omitted.
    pub estado_id: Option<DbId>,
}

/// DTO for updating an existing attachment. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnexo {
    pub nombre: Option<String>,
    pub archivo_url: Option<String>,
    pub estado_id: Option<DbId>,
}
