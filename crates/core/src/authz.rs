//! The authorization gate.
//!
//! A pure decision function: given the identity's role and the
//! operation's declared allowed-role set, allow iff the role is a
//! member of the set. There is no role inheritance -- `admin` passes
//! only gates whose set lists [`Rol::Admin`] explicitly. Callers that
//! need HTTP semantics wrap the returned [`CoreError::Forbidden`] into
//! a 403; authentication failures are produced elsewhere and map to
//! 401 so the two are never conflated.

use crate::error::CoreError;
use crate::rol::Rol;

/// Allow iff `rol` is in `allowed`. An empty set always denies.
pub fn authorize(rol: Rol, allowed: &[Rol]) -> Result<(), CoreError> {
    if allowed.contains(&rol) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Se requiere uno de los roles: {}",
            describe(allowed)
        )))
    }
}

/// Render an allowed-role set for error messages.
fn describe(allowed: &[Rol]) -> String {
    if allowed.is_empty() {
        return "(ninguno)".to_string();
    }
    allowed
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
