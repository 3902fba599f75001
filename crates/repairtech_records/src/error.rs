// --- File: crates/repairtech_records/src/error.rs ---
use repairtech_common::{HttpStatusCode, RepairTechError};
use repairtech_core::{TicketError, ValidationErrors};
use repairtech_store::StoreError;
use thiserror::Error;

/// Record-surface error types.
///
/// `InvalidTicket` and `NotFound` are deliberately distinct kinds even
/// though the track endpoint collapses them into one user-facing message:
/// logs and tests need to tell a malformed ticket from a lookup miss.
#[derive(Error, Debug)]
pub enum RecordsError {
    /// Storage collaborator failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Submitted form failed validation
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// The candidate ticket string never reached storage
    #[error(transparent)]
    InvalidTicket(#[from] TicketError),

    /// A well-formed query matched nothing
    #[error("No se encontró el registro solicitado")]
    NotFound,
}

impl From<RecordsError> for RepairTechError {
    fn from(err: RecordsError) -> Self {
        match err {
            RecordsError::Store(e) => e.into(),
            RecordsError::Validation(errors) => RepairTechError::ValidationError(errors),
            RecordsError::InvalidTicket(e) => {
                let mut errors = ValidationErrors::new();
                errors.push("ticket_number", e.to_string());
                RepairTechError::ValidationError(errors)
            }
            RecordsError::NotFound => {
                RepairTechError::NotFoundError("No se encontró el registro solicitado".to_string())
            }
        }
    }
}

impl HttpStatusCode for RecordsError {
    fn status_code(&self) -> u16 {
        match self {
            RecordsError::Store(e) => e.status_code(),
            RecordsError::Validation(_) => 400,
            RecordsError::InvalidTicket(_) => 400,
            RecordsError::NotFound => 404,
        }
    }
}
