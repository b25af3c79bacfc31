//! Notificación entity model and DTOs.

use pcg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A notification row from the `notificaciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notificacion {
    pub id: DbId,
    pub usuario_id: DbId,
    pub titulo: String,
    pub mensaje: Option<String>,
    pub leida: bool,
    pub fecha_envio: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new notification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificacion {
    pub usuario_id: DbId,
    pub titulo: String,
    pub mensaje: Option<String>,
}
