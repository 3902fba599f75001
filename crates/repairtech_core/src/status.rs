// --- File: crates/repairtech_core/src/status.rs ---
//! Repair record lifecycle states and their display mapping.
//!
//! The status is a flat label, not a guarded state machine: the schema
//! accepts any of the known values at any time, matching the behavior of
//! the edit form. Rows written behind the API's back may carry arbitrary
//! strings; those deserialize to [`RepairStatus::Unknown`] and render with
//! the neutral fallback instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle label of a repair record. Defaults to `Pending` on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RepairStatus {
    #[default]
    Pending,
    InProgress,
    NeedsRepair,
    Completed,
    /// Any value the enum does not know, e.g. written by direct storage
    /// manipulation. Never accepted from forms.
    Unknown,
}

impl<'de> Deserialize<'de> for RepairStatus {
    /// Lenient wire parse: rows written behind the API's back must not
    /// fail the read path, so anything unrecognized becomes `Unknown`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(RepairStatus::from_str(&raw).unwrap_or(RepairStatus::Unknown))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Estado inválido")]
pub struct InvalidStatus;

impl RepairStatus {
    /// The values a form may submit, in display order.
    pub const SELECTABLE: [RepairStatus; 4] = [
        RepairStatus::Pending,
        RepairStatus::InProgress,
        RepairStatus::NeedsRepair,
        RepairStatus::Completed,
    ];

    /// Wire form of the status, snake_case.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "pending",
            RepairStatus::InProgress => "in_progress",
            RepairStatus::NeedsRepair => "needs_repair",
            RepairStatus::Completed => "completed",
            RepairStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for RepairStatus {
    type Err = InvalidStatus;

    /// Strict parse used by the validation layer: only the four selectable
    /// values are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RepairStatus::Pending),
            "in_progress" => Ok(RepairStatus::InProgress),
            "needs_repair" => Ok(RepairStatus::NeedsRepair),
            "completed" => Ok(RepairStatus::Completed),
            _ => Err(InvalidStatus),
        }
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a status looks like wherever it is rendered: a localized label and
/// the badge color class the frontend applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusDisplay {
    pub label: &'static str,
    pub color: &'static str,
}

const FALLBACK_DISPLAY: StatusDisplay = StatusDisplay {
    label: "Desconocido",
    color: "bg-slate-100 text-slate-800 border-slate-200",
};

/// Pure lookup from status to display data, with a neutral fallback for
/// anything unrecognized.
pub fn display(status: RepairStatus) -> StatusDisplay {
    match status {
        RepairStatus::Pending => StatusDisplay {
            label: "Pendiente",
            color: "bg-yellow-100 text-yellow-800 border-yellow-200",
        },
        RepairStatus::InProgress => StatusDisplay {
            label: "En progreso",
            color: "bg-blue-100 text-blue-800 border-blue-200",
        },
        RepairStatus::NeedsRepair => StatusDisplay {
            label: "Necesita reparación",
            color: "bg-orange-100 text-orange-800 border-orange-200",
        },
        RepairStatus::Completed => StatusDisplay {
            label: "Completada",
            color: "bg-green-100 text-green-800 border-green-200",
        },
        RepairStatus::Unknown => FALLBACK_DISPLAY,
    }
}

/// Display lookup for a raw status string, used where rows may predate the
/// enum or bypass it entirely.
pub fn display_for(raw: &str) -> StatusDisplay {
    match RepairStatus::from_str(raw) {
        Ok(status) => display(status),
        Err(_) => FALLBACK_DISPLAY,
    }
}
