//! HTTP transport for authentication calls.
//!
//! The [`AuthApi`] trait is the seam between the session cache and the
//! network; [`HttpAuthApi`] is the real `reqwest` implementation, and
//! tests substitute a fake.

use async_trait::async_trait;
use pcg_core::rol::Rol;
use pcg_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// The current user's identity as returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioActual {
    pub id: DbId,
    pub nombre: String,
    pub correo: String,
    /// Parsed from the wire name; an unknown role fails
    /// deserialization instead of propagating ambiguity.
    pub rol: Rol,
    pub rol_id: DbId,
    pub estado_id: DbId,
}

impl UsuarioActual {
    /// Convenience for role-gated views.
    pub fn es_admin(&self) -> bool {
        self.rol == Rol::Admin
    }
}

/// Body of a successful login.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
}

/// Error body shape returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Authentication calls the session cache needs.
#[async_trait]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, correo: &str, password: &str) -> Result<String, ClientError>;

    /// Fetch the profile for a bearer token.
    async fn me(&self, token: &str) -> Result<UsuarioActual, ClientError>;
}

/// The real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAuthApi {
    /// `base_url` is the API root including the version prefix, e.g.
    /// `http://localhost:8000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, correo: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .form(&[("username", correo), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: TokenResponse = response.json().await?;
            return Ok(body.access_token);
        }

        // Invalid credentials (401) and a deactivated account (403)
        // both mean "the login did not happen"; keep the server's
        // distinction for the UI.
        match status.as_u16() {
            401 => Err(ClientError::CredencialesInvalidas),
            403 => Err(ClientError::Prohibido),
            code => Err(ClientError::Api {
                status: code,
                detail: read_detail(response).await,
            }),
        }
    }

    async fn me(&self, token: &str) -> Result<UsuarioActual, ClientError> {
        let response = self
            .http
            .get(format!("{}/auth/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        match status.as_u16() {
            401 => Err(ClientError::NoAutenticado),
            403 => Err(ClientError::Prohibido),
            code => Err(ClientError::Api {
                status: code,
                detail: read_detail(response).await,
            }),
        }
    }
}

/// Best-effort extraction of the `detail` field from an error body.
async fn read_detail(response: reqwest::Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => detail,
        _ => "error desconocido".to_string(),
    }
}
