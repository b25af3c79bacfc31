//! Client-side session cache for the PCG API.
//!
//! Mirrors what a browser front-end keeps between page loads: the
//! bearer token and the current user profile under fixed storage keys,
//! plus the `unknown -> authenticated | anonymous` resolution that
//! runs on startup.
//!
//! - [`api`] -- the HTTP transport (login, profile fetch) behind a
//!   trait seam so tests can fake it.
//! - [`store`] -- persisted key/value storage (in-memory or a JSON
//!   file), the localStorage analog.
//! - [`session`] -- the session state machine.
//! - [`error`] -- the client-side error taxonomy; 401 and 403 are
//!   distinct variants because they demand different UI reactions.

pub mod api;
pub mod error;
pub mod session;
pub mod store;

pub use api::{AuthApi, HttpAuthApi, UsuarioActual};
pub use error::ClientError;
pub use session::{EstadoSesion, SesionCache};
pub use store::{FileStore, MemoryStore, SessionStore};
