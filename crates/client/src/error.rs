//! Client-side error taxonomy.

/// Errors surfaced by the API client and session cache.
///
/// `NoAutenticado` and `Prohibido` are separate variants on purpose:
/// the first sends the UI to the login view (and clears the session),
/// the second to its "no autorizado" view.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Login rejected the credentials. The server never says whether
    /// the correo or the password was wrong.
    #[error("Credenciales inválidas")]
    CredencialesInvalidas,

    /// The token is missing, invalid, or expired (HTTP 401).
    #[error("No autenticado")]
    NoAutenticado,

    /// Authenticated but the role does not allow the operation (HTTP 403).
    #[error("Operación no permitida para el rol actual")]
    Prohibido,

    /// Any other API error, with the server's detail message.
    #[error("Error de la API ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// The request never completed (DNS, connection, timeout). Not
    /// retried automatically; surfaced for the UI to display.
    #[error("Error de red: {0}")]
    Red(#[from] reqwest::Error),
}
