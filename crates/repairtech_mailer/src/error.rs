// --- File: crates/repairtech_mailer/src/error.rs ---
use repairtech_common::{external_service_error, HttpStatusCode, RepairTechError};
use thiserror::Error;

/// Mailer-specific error types.
#[derive(Error, Debug)]
pub enum MailerError {
    /// Error occurred during an email provider API request
    #[error("Email provider request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the email provider API
    #[error("Email provider returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing the email provider response
    #[error("Failed to parse email provider response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete mailer configuration (section or API key)
    #[error("Mailer configuration missing or incomplete")]
    ConfigError,
}

/// Convert MailerError to RepairTechError
impl From<MailerError> for RepairTechError {
    fn from(err: MailerError) -> Self {
        match err {
            MailerError::RequestError(e) => {
                RepairTechError::HttpError(format!("Email provider request error: {}", e))
            }
            MailerError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Email provider",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            MailerError::ParseError(e) => {
                RepairTechError::ParseError(format!("Email provider parse error: {}", e))
            }
            MailerError::ConfigError => RepairTechError::ConfigError(
                "Mailer configuration missing or incomplete".to_string(),
            ),
        }
    }
}

impl HttpStatusCode for MailerError {
    fn status_code(&self) -> u16 {
        match self {
            MailerError::RequestError(_) => 500,
            MailerError::ApiError { .. } => 500,
            MailerError::ParseError(_) => 502,
            MailerError::ConfigError => 500,
        }
    }
}
