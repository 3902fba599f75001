// --- File: crates/repairtech_core/src/ticket.rs ---
//! The public ticket identifier scheme.
//!
//! Ticket numbers are assigned by the storage collaborator when a repair
//! record is inserted; this code never generates one. It does own the format
//! contract (`RT-YYYYMMDD-XXXX`) and the normalization applied to customer
//! input before any lookup is attempted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format contract for ticket numbers, applied after normalization.
static TICKET_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^RT-\d{8}-\d{4}$").expect("ticket format regex must compile"));

/// A validated, normalized ticket number.
///
/// Input is trimmed and uppercased before validation, so `" rt-20250102-1234 "`
/// and `RT-20250102-1234` are the same ticket. Once constructed the value is
/// immutable; lookups use it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TicketNumber(String);

/// Why a candidate string is not a ticket number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    #[error("El número de ticket es requerido")]
    Empty,

    #[error("Formato de ticket inválido. Debe ser RT-YYYYMMDD-XXXX")]
    Format,
}

impl TicketNumber {
    /// Normalize and validate a candidate ticket number.
    ///
    /// Fails before any storage call is made; a `TicketError` is a
    /// validation error, not a lookup miss.
    pub fn parse(input: &str) -> Result<Self, TicketError> {
        let normalized = input.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(TicketError::Empty);
        }
        if !TICKET_FORMAT.is_match(&normalized) {
            return Err(TicketError::Format);
        }
        Ok(Self(normalized))
    }

    /// The normalized form, e.g. `RT-20250615-0007`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TicketNumber {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TicketNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for TicketNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        TicketNumber::parse(&raw).map_err(serde::de::Error::custom)
    }
}
