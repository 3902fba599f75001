// --- File: crates/repairtech_records/src/logic.rs ---
use crate::error::RecordsError;
use repairtech_core::{RepairRecord, RepairStatus, TicketNumber};
use repairtech_store::RepairRecordRepository;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

// --- List query state ---
// Search, status filter and sort order arrive as request parameters and
// live nowhere else; two concurrent list views cannot observe each other.

/// Sort order for a record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Brand,
    Status,
}

/// Query parameters of the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct ListQuery {
    /// Free-text match over brand, model, ticket, customer name and issue.
    #[serde(default)]
    pub search: Option<String>,
    /// One status value, or "all".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

/// Apply search, status filter and sort to an owner's records.
pub fn filter_and_sort(mut records: Vec<RepairRecord>, query: &ListQuery) -> Vec<RepairRecord> {
    if let Some(search) = query.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            records.retain(|record| {
                record.brand.to_lowercase().contains(&needle)
                    || record.model.to_lowercase().contains(&needle)
                    || record
                        .ticket_number
                        .as_deref()
                        .is_some_and(|t| t.to_lowercase().contains(&needle))
                    || record.customer_name.to_lowercase().contains(&needle)
                    || record.issue_description.to_lowercase().contains(&needle)
            });
        }
    }

    if let Some(status) = query.status.as_deref() {
        if status != "all" {
            match RepairStatus::from_str(status) {
                Ok(wanted) => records.retain(|record| record.status == wanted),
                // An unknown filter value matches nothing rather than
                // silently matching everything.
                Err(_) => records.clear(),
            }
        }
    }

    match query.sort {
        SortKey::Newest => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Brand => records.sort_by(|a, b| a.brand.to_lowercase().cmp(&b.brand.to_lowercase())),
        SortKey::Status => {
            records.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str()))
        }
    }

    records
}

// --- Dashboard counts ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardSummary {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub needs_repair: u64,
    pub completed: u64,
}

/// Per-status counts for an owner, via the storage count operation.
pub async fn dashboard_summary(
    records: &RepairRecordRepository,
    owner_id: &str,
) -> Result<DashboardSummary, RecordsError> {
    let total = records.count_for_owner(owner_id, None).await?;
    let pending = records
        .count_for_owner(owner_id, Some(RepairStatus::Pending))
        .await?;
    let in_progress = records
        .count_for_owner(owner_id, Some(RepairStatus::InProgress))
        .await?;
    let needs_repair = records
        .count_for_owner(owner_id, Some(RepairStatus::NeedsRepair))
        .await?;
    let completed = records
        .count_for_owner(owner_id, Some(RepairStatus::Completed))
        .await?;

    Ok(DashboardSummary {
        total,
        pending,
        in_progress,
        needs_repair,
        completed,
    })
}

// --- Public ticket lookup ---

/// Normalize, validate and look up a candidate ticket number.
///
/// A malformed candidate fails before any storage call; a well-formed one
/// that matches nothing is a lookup miss. The two stay distinct here and in
/// the logs even though the track endpoint reports them identically.
pub async fn lookup_by_ticket(
    records: &RepairRecordRepository,
    candidate: &str,
) -> Result<RepairRecord, RecordsError> {
    let ticket = TicketNumber::parse(candidate)?;

    match records.find_by_ticket(&ticket).await? {
        Some(record) => {
            info!("ticket {} found", ticket);
            Ok(record)
        }
        None => {
            info!("ticket {} not found", ticket);
            Err(RecordsError::NotFound)
        }
    }
}
