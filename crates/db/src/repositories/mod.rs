//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod anexo_repo;
pub mod convocatoria_repo;
pub mod cronograma_repo;
pub mod estado_repo;
pub mod evaluacion_repo;
pub mod facultad_repo;
pub mod grupo_investigacion_repo;
pub mod linea_investigacion_repo;
pub mod notificacion_repo;
pub mod programa_repo;
pub mod proyecto_repo;
pub mod recurso_repo;
pub mod reporte_repo;
pub mod rol_repo;
pub mod usuario_repo;

pub use anexo_repo::AnexoRepo;
pub use convocatoria_repo::ConvocatoriaRepo;
pub use cronograma_repo::CronogramaRepo;
pub use estado_repo::EstadoRepo;
pub use evaluacion_repo::EvaluacionRepo;
pub use facultad_repo::FacultadRepo;
pub use grupo_investigacion_repo::GrupoInvestigacionRepo;
pub use linea_investigacion_repo::LineaInvestigacionRepo;
pub use notificacion_repo::NotificacionRepo;
pub use programa_repo::ProgramaRepo;
pub use proyecto_repo::ProyectoRepo;
pub use recurso_repo::RecursoRepo;
pub use reporte_repo::ReporteRepo;
pub use rol_repo::RolRepo;
pub use usuario_repo::UsuarioRepo;

/// Default page size for paginated listings.
const DEFAULT_LIMIT: i64 = 50;
/// Upper bound on client-supplied page sizes.
const MAX_LIMIT: i64 = 200;

/// Clamp a client-supplied limit into `[1, MAX_LIMIT]`.
pub(crate) fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a client-supplied offset to be non-negative.
pub(crate) fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
