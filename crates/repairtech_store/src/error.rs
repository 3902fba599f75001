// --- File: crates/repairtech_store/src/error.rs ---
use repairtech_common::{external_service_error, HttpStatusCode, RepairTechError};
use thiserror::Error;

/// Storage-collaborator error types.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred during a storage API request
    #[error("Storage request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the storage API
    #[error("Storage API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing a storage API response
    #[error("Failed to parse storage response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete storage configuration
    #[error("Storage configuration missing or incomplete")]
    ConfigError,

    /// The count response came back without a usable total
    #[error("Storage count response missing content range")]
    MissingCount,
}

/// Convert StoreError to RepairTechError
impl From<StoreError> for RepairTechError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::RequestError(e) => {
                RepairTechError::HttpError(format!("Storage request error: {}", e))
            }
            StoreError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Storage API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            StoreError::ParseError(e) => {
                RepairTechError::ParseError(format!("Storage response parse error: {}", e))
            }
            StoreError::ConfigError => RepairTechError::ConfigError(
                "Storage configuration missing or incomplete".to_string(),
            ),
            StoreError::MissingCount => external_service_error(
                "Storage API",
                "count response missing content range".to_string(),
            ),
        }
    }
}

impl HttpStatusCode for StoreError {
    fn status_code(&self) -> u16 {
        match self {
            StoreError::RequestError(_) => 500,
            StoreError::ApiError { status_code, .. } => *status_code,
            StoreError::ParseError(_) => 502,
            StoreError::ConfigError => 500,
            StoreError::MissingCount => 502,
        }
    }
}
