//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod anexo;
pub mod convocatoria;
pub mod cronograma;
pub mod estado;
pub mod evaluacion;
pub mod facultad;
pub mod grupo_investigacion;
pub mod linea_investigacion;
pub mod notificacion;
pub mod programa;
pub mod proyecto;
pub mod recurso;
pub mod reporte;
pub mod rol;
pub mod usuario;
