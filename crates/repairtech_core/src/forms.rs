// --- File: crates/repairtech_core/src/forms.rs ---
//! Schema-based validation of user input.
//!
//! One schema per input surface. Validation runs synchronously against the
//! full submitted object before any side-effecting call; on failure every
//! failing field is reported, not just the first; on success the caller gets
//! a normalized, strongly typed value safe to pass to storage.

use crate::status::RepairStatus;
use crate::ticket::{TicketError, TicketNumber};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pragmatic email shape check: something@something.tld, no whitespace.
static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile"));

/// A single failed field: path within the submitted object plus a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of field errors for one submitted object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// True if any error is attached to the given field path.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }

    /// Finish a validation pass: the value if nothing failed, the error
    /// list otherwise.
    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Empty form fields mean "not provided".
fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Length in characters, not bytes. Customer names carry accents.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !EMAIL_FORMAT.is_match(value) {
        errors.push(field, "Email inválido");
    } else if char_len(value) > 255 {
        errors.push(field, "El email es demasiado largo");
    }
}

fn check_name(errors: &mut ValidationErrors, field: &str, value: &str) {
    if char_len(value) < 2 {
        errors.push(field, "El nombre debe tener al menos 2 caracteres");
    } else if char_len(value) > 100 {
        errors.push(field, "El nombre es demasiado largo");
    }
}

// --- Repair record create/edit ---

/// Raw submission of the repair record form. All fields arrive as strings,
/// matching the form encoding; `estimated_cost` keeps its textual form so
/// "" and "0" stay distinguishable.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RepairRecordForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub issue_description: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub technician_notes: String,
    #[serde(default)]
    pub estimated_cost: String,
}

fn default_status() -> String {
    RepairStatus::Pending.as_str().to_string()
}

impl RepairRecordForm {
    pub fn validate(self) -> Result<crate::models::RepairRecordData, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(&mut errors, "customer_name", &self.customer_name);
        check_email(&mut errors, "customer_email", &self.customer_email);

        if self.brand.is_empty() {
            errors.push("brand", "La marca es requerida");
        } else if char_len(&self.brand) > 100 {
            errors.push("brand", "La marca es demasiado larga");
        }

        if self.model.is_empty() {
            errors.push("model", "El modelo es requerido");
        } else if char_len(&self.model) > 100 {
            errors.push("model", "El modelo es demasiado largo");
        }

        if char_len(&self.issue_description) < 10 {
            errors.push(
                "issue_description",
                "La descripción debe tener al menos 10 caracteres",
            );
        } else if char_len(&self.issue_description) > 2000 {
            errors.push("issue_description", "La descripción es demasiado larga");
        }

        let status = match RepairStatus::from_str(&self.status) {
            Ok(status) => status,
            Err(_) => {
                errors.push("status", "Estado inválido");
                RepairStatus::Pending
            }
        };

        // Empty string is "not provided", distinct from zero.
        let estimated_cost = match self.estimated_cost.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
                _ => {
                    errors.push(
                        "estimated_cost",
                        "El costo debe ser un número válido mayor o igual a 0",
                    );
                    None
                }
            },
        };

        errors.into_result(crate::models::RepairRecordData {
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: optional(self.customer_phone),
            brand: self.brand,
            model: self.model,
            serial_number: optional(self.serial_number),
            issue_description: self.issue_description,
            status,
            technician_notes: optional(self.technician_notes),
            estimated_cost,
        })
    }
}

// --- Profile edit ---

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
}

impl ProfileForm {
    pub fn validate(self) -> Result<crate::models::ProfileData, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "full_name", &self.full_name);

        errors.into_result(crate::models::ProfileData {
            full_name: self.full_name,
            phone: optional(self.phone),
        })
    }
}

// --- Ticket lookup ---

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TrackTicketForm {
    #[serde(default)]
    pub ticket_number: String,
}

impl TrackTicketForm {
    /// Normalize and validate the candidate ticket number. A failure here
    /// means no lookup is performed at all.
    pub fn validate(self) -> Result<TicketNumber, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match TicketNumber::parse(&self.ticket_number) {
            Ok(ticket) => errors.into_result(ticket),
            Err(err @ (TicketError::Empty | TicketError::Format)) => {
                errors.push("ticket_number", err.to_string());
                Err(errors)
            }
        }
    }
}

// --- Login ---

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Validated login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(self) -> Result<LoginCredentials, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !EMAIL_FORMAT.is_match(&self.email) {
            errors.push("email", "Email inválido");
        }
        if char_len(&self.password) < 6 {
            errors.push("password", "La contraseña debe tener al menos 6 caracteres");
        }

        errors.into_result(LoginCredentials {
            email: self.email,
            password: self.password,
        })
    }
}

// --- Registration ---

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Validated registration payload. The confirmation field does not survive
/// validation; it only exists to be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(self) -> Result<Registration, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(&mut errors, "full_name", &self.full_name);
        check_email(&mut errors, "email", &self.email);

        if char_len(&self.password) < 6 {
            errors.push("password", "La contraseña debe tener al menos 6 caracteres");
        } else if char_len(&self.password) > 100 {
            errors.push("password", "La contraseña es demasiado larga");
        }

        // Cross-field rule, attached to the confirmation field no matter
        // what the individual fields looked like.
        if self.password != self.confirm_password {
            errors.push("confirm_password", "Las contraseñas no coinciden");
        }

        errors.into_result(Registration {
            full_name: self.full_name,
            email: self.email,
            phone: optional(self.phone),
            password: self.password,
        })
    }
}
