// --- File: crates/repairtech_store/src/repositories/notifications.rs ---
//! Repository for the `notifications` table.
//!
//! Rows are created by server-side triggers in the storage backend. The
//! only mutation this side performs is flipping `is_read`; title and
//! message stay immutable.

use crate::client::{eq, StoreClient};
use crate::error::StoreError;
use repairtech_core::Notification;
use serde_json::json;
use std::sync::Arc;

const TABLE: &str = "notifications";

#[derive(Debug, Clone)]
pub struct NotificationRepository {
    client: Arc<StoreClient>,
}

impl NotificationRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    /// All notifications for a user, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, StoreError> {
        let filters = [("user_id", eq(user_id))];
        self.client
            .select(TABLE, &filters, Some("created_at.desc"))
            .await
    }

    /// Mark one notification read; None when no row matched the user.
    pub async fn mark_read(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Notification>, StoreError> {
        let filters = [("id", eq(id)), ("user_id", eq(user_id))];
        let mut rows: Vec<Notification> = self
            .client
            .update_returning(TABLE, &filters, &json!({ "is_read": true }))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Mark every unread notification read; returns how many were flipped.
    pub async fn mark_all_read(&self, user_id: &str) -> Result<u64, StoreError> {
        let filters = [("user_id", eq(user_id)), ("is_read", eq("false"))];
        let rows: Vec<Notification> = self
            .client
            .update_returning(TABLE, &filters, &json!({ "is_read": true }))
            .await?;
        Ok(rows.len() as u64)
    }

    /// How many unread notifications the user has.
    pub async fn unread_count(&self, user_id: &str) -> Result<u64, StoreError> {
        let filters = [("user_id", eq(user_id)), ("is_read", eq("false"))];
        self.client.count(TABLE, &filters).await
    }
}
