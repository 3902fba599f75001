// --- File: crates/repairtech_auth/src/error.rs ---
use repairtech_common::{external_service_error, HttpStatusCode, RepairTechError};
use thiserror::Error;

/// Auth-collaborator error types.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Error occurred during an auth API request
    #[error("Auth request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the auth API
    #[error("Auth API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// The account exists but its email has not been confirmed yet.
    /// Callers surface this with a resend-confirmation action attached.
    #[error("Tu correo electrónico aún no ha sido confirmado. Por favor revisa tu bandeja de entrada.")]
    EmailNotConfirmed {
        /// The provider's own message, kept for logs.
        provider_message: String,
    },

    /// No bearer token on a request that requires a session
    #[error("No hay una sesión activa")]
    MissingToken,

    /// The session token did not resolve to a user
    #[error("Sesión inválida o expirada")]
    InvalidSession,

    /// Error parsing an auth API response
    #[error("Failed to parse auth response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete auth configuration
    #[error("Auth configuration missing or incomplete")]
    ConfigError,
}

/// Convert AuthError to RepairTechError
impl From<AuthError> for RepairTechError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::RequestError(e) => {
                RepairTechError::HttpError(format!("Auth request error: {}", e))
            }
            AuthError::ApiError {
                status_code,
                message,
            } if status_code < 500 => RepairTechError::AuthError(message),
            AuthError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Auth API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            err @ AuthError::EmailNotConfirmed { .. } => {
                RepairTechError::EmailNotConfirmed(err.to_string())
            }
            err @ (AuthError::MissingToken | AuthError::InvalidSession) => {
                RepairTechError::AuthError(err.to_string())
            }
            AuthError::ParseError(e) => {
                RepairTechError::ParseError(format!("Auth response parse error: {}", e))
            }
            AuthError::ConfigError => {
                RepairTechError::ConfigError("Auth configuration missing or incomplete".to_string())
            }
        }
    }
}

impl HttpStatusCode for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            AuthError::RequestError(_) => 500,
            AuthError::ApiError { status_code, .. } => *status_code,
            AuthError::EmailNotConfirmed { .. } => 401,
            AuthError::MissingToken => 401,
            AuthError::InvalidSession => 401,
            AuthError::ParseError(_) => 502,
            AuthError::ConfigError => 500,
        }
    }
}
