// --- File: crates/repairtech_store/src/repositories/records.rs ---
//! Repository for the `computers` table.
//!
//! Owner-scoped operations always pass the owner filter explicitly, even
//! though the collaborator enforces row ownership itself. The ticket lookup
//! is the one deliberately unscoped query: the ticket number is the public
//! key customers track with.

use crate::client::{eq, StoreClient};
use crate::error::StoreError;
use repairtech_core::{RepairRecord, RepairRecordData, RepairStatus, TicketNumber};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

const TABLE: &str = "computers";

/// Insert payload: validated fields plus the owning account.
/// `ticket_number` is never part of this; storage assigns it.
#[derive(Debug, Serialize)]
struct NewRecordRow<'a> {
    owner_id: &'a str,
    #[serde(flatten)]
    data: &'a RepairRecordData,
}

#[derive(Debug, Clone)]
pub struct RepairRecordRepository {
    client: Arc<StoreClient>,
}

impl RepairRecordRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// Insert a record for an owner; the returned row carries the assigned
    /// ticket number.
    pub async fn insert(
        &self,
        owner_id: &str,
        data: &RepairRecordData,
    ) -> Result<RepairRecord, StoreError> {
        debug!("inserting repair record for owner {}", owner_id);
        self.client
            .insert_returning(TABLE, &NewRecordRow { owner_id, data })
            .await
    }

    /// Update a record the owner holds; None when no row matched.
    pub async fn update(
        &self,
        owner_id: &str,
        id: &str,
        data: &RepairRecordData,
    ) -> Result<Option<RepairRecord>, StoreError> {
        let filters = [("id", eq(id)), ("owner_id", eq(owner_id))];
        let mut rows: Vec<RepairRecord> = self
            .client
            .update_returning(TABLE, &filters, data)
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Delete a record the owner holds; false when no row matched.
    pub async fn delete(&self, owner_id: &str, id: &str) -> Result<bool, StoreError> {
        let filters = [("id", eq(id)), ("owner_id", eq(owner_id))];
        self.client.delete(TABLE, &filters).await
    }

    pub async fn find_by_id(
        &self,
        owner_id: &str,
        id: &str,
    ) -> Result<Option<RepairRecord>, StoreError> {
        let filters = [("id", eq(id)), ("owner_id", eq(owner_id))];
        self.client.select_one(TABLE, &filters).await
    }

    /// All records for an owner, newest first.
    pub async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<RepairRecord>, StoreError> {
        let filters = [("owner_id", eq(owner_id))];
        self.client
            .select(TABLE, &filters, Some("created_at.desc"))
            .await
    }

    /// Exact-match lookup on a validated ticket number. Public by design.
    pub async fn find_by_ticket(
        &self,
        ticket: &TicketNumber,
    ) -> Result<Option<RepairRecord>, StoreError> {
        let filters = [("ticket_number", eq(ticket.as_str()))];
        self.client.select_one(TABLE, &filters).await
    }

    /// Count of an owner's records, optionally narrowed to one status.
    pub async fn count_for_owner(
        &self,
        owner_id: &str,
        status: Option<RepairStatus>,
    ) -> Result<u64, StoreError> {
        let mut filters = vec![("owner_id", eq(owner_id))];
        if let Some(status) = status {
            filters.push(("status", eq(status.as_str())));
        }
        self.client.count(TABLE, &filters).await
    }
}
