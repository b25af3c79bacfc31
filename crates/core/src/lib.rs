//! Domain vocabulary shared by every PCG crate.
//!
//! - [`types`] -- ID and timestamp aliases.
//! - [`error`] -- the domain error taxonomy.
//! - [`rol`] -- the fixed role enumeration and its wire names.
//! - [`estado`] -- the shared Estado vocabulary.
//! - [`authz`] -- the pure authorization gate.

pub mod authz;
pub mod error;
pub mod estado;
pub mod rol;
pub mod types;
