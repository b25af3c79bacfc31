//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and declares one operation
//! family's allowed-role set, checked by the pure gate in
//! [`pcg_core::authz`]. There is no role inheritance: a set admits
//! exactly the roles it lists. Rejections are 403 Forbidden, always
//! distinct from the 401 produced by a missing or invalid token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pcg_core::authz::authorize;
use pcg_core::rol::Rol;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Roles allowed to administer users and reference data.
const ADMIN: &[Rol] = &[Rol::Admin];

/// Roles allowed to manage the institutional structure (facultades,
/// programas, líneas, grupos, convocatorias) and approve reports.
const GESTION: &[Rol] = &[Rol::Admin, Rol::Lider];

/// Roles allowed to run projects and their children, and write reports.
const INVESTIGACION: &[Rol] = &[Rol::Admin, Rol::Lider, Rol::Investigador];

/// Roles allowed to record evaluations.
const EVALUACION: &[Rol] = &[Rol::Admin, Rol::EvaluadorInterno, Rol::EvaluadorExterno];

macro_rules! define_gate {
    (
        $(#[$meta:meta])*
        $name:ident => $allowed:expr
    ) => {
        $(#[$meta])*
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let user = AuthUser::from_request_parts(parts, state).await?;
                authorize(user.rol, $allowed)?;
                Ok($name(user))
            }
        }
    };
}

define_gate! {
    /// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
    ///
    /// ```ignore
    /// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
    ///     // user is guaranteed to be an admin here
    ///     Ok(Json(()))
    /// }
    /// ```
    RequireAdmin => ADMIN
}

define_gate! {
    /// Requires `admin` or `lider`.
    RequireGestion => GESTION
}

define_gate! {
    /// Requires `admin`, `lider`, or `investigador`.
    RequireInvestigacion => INVESTIGACION
}

define_gate! {
    /// Requires `admin` or one of the evaluator roles.
    RequireEvaluacion => EVALUACION
}

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for
/// use in route definitions where the intent "this route requires
/// authentication" should be self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
