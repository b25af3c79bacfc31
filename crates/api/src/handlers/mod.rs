//! HTTP request handlers, one module per resource.

pub mod anexo;
pub mod auth;
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
pub mod usuario_admin;
