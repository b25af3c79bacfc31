//! Rol reference rows.
//!
//! Identity (id, nombre) is immutable and must match the seed data;
//! only the description can change.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rol {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a role. Only the description is mutable.
#[derive(Debug, Deserialize)]
pub struct UpdateRol {
    pub descripcion: Option<String>,
}
