// --- File: crates/repairtech_core/src/lib.rs ---
// Declare modules within this crate
pub mod forms;
#[cfg(test)]
mod forms_test;
pub mod models;
pub mod status;
pub mod ticket;
#[cfg(test)]
mod ticket_proptest;

// Re-export the types the rest of the workspace reaches for constantly
pub use forms::{FieldError, ValidationErrors};
pub use models::{Notification, Profile, ProfileData, RepairRecord, RepairRecordData};
pub use status::{display, display_for, RepairStatus, StatusDisplay};
pub use ticket::{TicketError, TicketNumber};
