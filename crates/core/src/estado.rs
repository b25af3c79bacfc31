//! The shared Estado vocabulary.
//!
//! A single small state enumeration applied as a state field across
//! usuarios and every domain entity. The variant discriminants match
//! the seed order (1-based) in the `estados` table.

use crate::types::DbId;

/// Estado ID type; a foreign key into the seeded `estados` table.
pub type EstadoId = DbId;

/// Entity state shared by usuarios, proyectos, convocatorias, etc.
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estado {
    Activo = 1,
    Inactivo = 2,
    Pendiente = 3,
    EnRevision = 4,
    Aprobado = 5,
    Rechazado = 6,
}

impl Estado {
    /// Return the database estado ID.
    pub fn id(self) -> EstadoId {
        self as EstadoId
    }

    /// Human-readable name matching the seed data.
    pub fn nombre(self) -> &'static str {
        match self {
            Estado::Activo => "Activo",
            Estado::Inactivo => "Inactivo",
            Estado::Pendiente => "Pendiente",
            Estado::EnRevision => "En revisión",
            Estado::Aprobado => "Aprobado",
            Estado::Rechazado => "Rechazado",
        }
    }
}

impl From<Estado> for EstadoId {
    fn from(value: Estado) -> Self {
        value as EstadoId
    }
}
