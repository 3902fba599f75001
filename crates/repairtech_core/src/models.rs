// --- File: crates/repairtech_core/src/models.rs ---
//! Entity models shared across all consumers.
//!
//! One explicit record type per storage table; the wire format matches what
//! the storage collaborator returns. Timestamps are storage-managed and
//! arrive as RFC 3339.

use crate::status::RepairStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A device in for repair, as stored in the `computers` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RepairRecord {
    /// Opaque row id generated by storage.
    pub id: String,
    /// Owning account. Row visibility is filtered on this by the storage
    /// collaborator; owner-scoped queries pass it explicitly as well.
    pub owner_id: String,
    /// Assigned by storage at insert, unique, immutable afterwards.
    pub ticket_number: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub brand: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub issue_description: String,
    pub status: RepairStatus,
    pub technician_notes: Option<String>,
    pub estimated_cost: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated repair record fields, ready to persist.
///
/// Produced only by the validation layer; insert attaches the owner id,
/// update sends it as-is. `ticket_number` is deliberately absent: it is
/// never client-settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RepairRecordData {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub brand: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub issue_description: String,
    pub status: RepairStatus,
    pub technician_notes: Option<String>,
    pub estimated_cost: Option<f64>,
}

/// A row in the `notifications` table.
///
/// Produced by server-side triggers in the storage backend; this code only
/// reads rows and flips `is_read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub computer_id: Option<String>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A row in the `profiles` table, one-to-one with an account.
///
/// The email mirrors the account and is not editable through this entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated profile fields, ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileData {
    pub full_name: String,
    pub phone: Option<String>,
}
