//! Handlers for the `/auth` resource (login, current profile,
//! password change).

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use pcg_core::error::CoreError;
use pcg_core::estado::Estado;
use pcg_core::rol::Rol;
use pcg_db::models::usuario::{Usuario, UsuarioResponse};
use pcg_db::repositories::UsuarioRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Minimum password length enforced on password change.
pub(crate) const MIN_PASSWORD_LENGTH: usize = 10;

/// The one message both invalid-credential causes share. Unknown
/// correo and wrong password must be indistinguishable from outside.
const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /auth/login` (`application/x-www-form-urlencoded`).
///
/// The `username` field carries the correo, per OAuth2 password-flow
/// convention.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Request body for `PUT /auth/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub contrasena_actual: String,
    pub contrasena_nueva: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with correo + password. Returns a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    // 1. Find user by correo.
    let user = UsuarioRepo::find_by_correo(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    // 2. Verify password. This happens before the estado check so a
    //    deactivated account is only revealed to callers holding the
    //    correct secret.
    let password_valid = verify_password(&input.password, &user.contrasena_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 3. Only active accounts may log in.
    if user.estado_id != Estado::Activo.id() {
        return Err(AppError::Core(CoreError::Forbidden(
            "La cuenta está desactivada".into(),
        )));
    }

    // 4. Resolve the role claim.
    let rol = Rol::from_id(user.rol_id)
        .map_err(|e| AppError::InternalError(format!("Rol inconsistente en la base: {e}")))?;

    // 5. Stamp last session.
    UsuarioRepo::record_login(&state.pool, user.id).await?;

    // 6. Issue the token.
    let access_token = generate_access_token(user.id, rol, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

/// GET /api/v1/auth/me
///
/// Return the authenticated user's profile, including the resolved role.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UsuarioResponse>> {
    let usuario = UsuarioRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("El usuario ya no existe".into())))?;

    Ok(Json(usuario_to_response(&usuario)?))
}

/// PUT /api/v1/auth/password
///
/// Change the authenticated user's password. Requires the current
/// password. Returns 204 No Content.
pub async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let usuario = UsuarioRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("El usuario ya no existe".into())))?;

    let current_valid = verify_password(&input.contrasena_actual, &usuario.contrasena_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "La contraseña actual no es correcta".into(),
        )));
    }

    validate_password_strength(&input.contrasena_nueva, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.contrasena_nueva)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UsuarioRepo::update_password(&state.pool, usuario.id, &hashed).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a full user row into the safe external representation.
///
/// Shared with the admin handlers.
pub(crate) fn usuario_to_response(usuario: &Usuario) -> AppResult<UsuarioResponse> {
    let rol = Rol::from_id(usuario.rol_id)
        .map_err(|e| AppError::InternalError(format!("Rol inconsistente en la base: {e}")))?;

    Ok(UsuarioResponse {
        id: usuario.id,
        nombre: usuario.nombre.clone(),
        correo: usuario.correo.clone(),
        telefono: usuario.telefono.clone(),
        rol: rol.as_str().to_string(),
        rol_id: usuario.rol_id,
        estado_id: usuario.estado_id,
        ultima_sesion: usuario.ultima_sesion,
        created_at: usuario.created_at,
    })
}
