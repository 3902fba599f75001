// --- File: crates/repairtech_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

pub use repairtech_core::forms::{FieldError, ValidationErrors};

/// The base error type for all RepairTech errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for RepairTechError.
#[derive(Error, Debug)]
pub enum RepairTechError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Authentication failed because the account email is unconfirmed.
    /// Kept separate from AuthError so callers can offer a resend action.
    #[error("Email not confirmed: {0}")]
    EmailNotConfirmed(String),

    /// One or more submitted fields failed validation.
    /// Every failing field is carried, not just the first.
    #[error("Validation failed for {} field(s)", .0.len())]
    ValidationError(ValidationErrors),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for RepairTechError {
    fn status_code(&self) -> u16 {
        match self {
            RepairTechError::HttpError(_) => 500,
            RepairTechError::ParseError(_) => 400,
            RepairTechError::ConfigError(_) => 500,
            RepairTechError::AuthError(_) => 401,
            RepairTechError::EmailNotConfirmed(_) => 401,
            RepairTechError::ValidationError(_) => 400,
            RepairTechError::ExternalServiceError { .. } => 502,
            RepairTechError::ConflictError(_) => 409,
            RepairTechError::NotFoundError(_) => 404,
            RepairTechError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, RepairTechError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, RepairTechError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, RepairTechError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| RepairTechError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, RepairTechError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| RepairTechError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for RepairTechError {
    fn from(err: reqwest::Error) -> Self {
        RepairTechError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for RepairTechError {
    fn from(err: serde_json::Error) -> Self {
        RepairTechError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for RepairTechError {
    fn from(err: std::io::Error) -> Self {
        RepairTechError::InternalError(err.to_string())
    }
}

impl From<ValidationErrors> for RepairTechError {
    fn from(errors: ValidationErrors) -> Self {
        RepairTechError::ValidationError(errors)
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> RepairTechError {
    RepairTechError::ConfigError(message.to_string())
}

pub fn validation_error(errors: ValidationErrors) -> RepairTechError {
    RepairTechError::ValidationError(errors)
}

pub fn field_error<T: fmt::Display>(field: &str, message: T) -> RepairTechError {
    let mut errors = ValidationErrors::new();
    errors.push(field, message.to_string());
    RepairTechError::ValidationError(errors)
}

pub fn not_found<T: fmt::Display>(message: T) -> RepairTechError {
    RepairTechError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> RepairTechError {
    RepairTechError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> RepairTechError {
    RepairTechError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> RepairTechError {
    RepairTechError::InternalError(message.to_string())
}
