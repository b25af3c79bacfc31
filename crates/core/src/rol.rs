//! The fixed role enumeration.
//!
//! Role rows are seeded once by the `roles` migration; the enum
//! discriminants match the seed order (1-based). Tokens carry the wire
//! name, never the numeric id, and unknown names are rejected at the
//! boundary instead of being propagated.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// A user's role. Governs which operations the user may perform.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rol {
    Admin = 1,
    Lider = 2,
    Investigador = 3,
    EvaluadorInterno = 4,
    EvaluadorExterno = 5,
}

impl Rol {
    /// Every role, in seed order.
    pub const ALL: [Rol; 5] = [
        Rol::Admin,
        Rol::Lider,
        Rol::Investigador,
        Rol::EvaluadorInterno,
        Rol::EvaluadorExterno,
    ];

    /// The wire name carried in token claims and API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Rol::Admin => "admin",
            Rol::Lider => "lider",
            Rol::Investigador => "investigador",
            Rol::EvaluadorInterno => "evaluador_interno",
            Rol::EvaluadorExterno => "evaluador_externo",
        }
    }

    /// Return the database role ID.
    pub fn id(self) -> DbId {
        self as DbId
    }

    /// Parse a wire name into a role. Unknown names are an error, not
    /// a silent default.
    pub fn parse(name: &str) -> Result<Rol, CoreError> {
        match name {
            "admin" => Ok(Rol::Admin),
            "lider" => Ok(Rol::Lider),
            "investigador" => Ok(Rol::Investigador),
            "evaluador_interno" => Ok(Rol::EvaluadorInterno),
            "evaluador_externo" => Ok(Rol::EvaluadorExterno),
            other => Err(CoreError::Validation(format!("Rol desconocido: {other}"))),
        }
    }

    /// Map a database role ID back to the enum.
    pub fn from_id(id: DbId) -> Result<Rol, CoreError> {
        match id {
            1 => Ok(Rol::Admin),
            2 => Ok(Rol::Lider),
            3 => Ok(Rol::Investigador),
            4 => Ok(Rol::EvaluadorInterno),
            5 => Ok(Rol::EvaluadorExterno),
            other => Err(CoreError::Validation(format!(
                "Rol desconocido con id {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Rol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
