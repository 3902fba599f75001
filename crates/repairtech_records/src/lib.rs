// --- File: crates/repairtech_records/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod notifications;
pub mod routes;

// Re-export for main backend
pub use error::RecordsError;
pub use handlers::{RecordsState, TrackResponse};
pub use logic::{filter_and_sort, lookup_by_ticket, DashboardSummary, ListQuery, SortKey};
pub use routes::routes;
