// --- File: crates/repairtech_store/src/repositories/profiles.rs ---
//! Repository for the `profiles` table. One row per account; the account
//! email is mirrored into the row by the backend and never written from
//! here.

use crate::client::{eq, StoreClient};
use crate::error::StoreError;
use repairtech_core::{Profile, ProfileData};
use std::sync::Arc;

const TABLE: &str = "profiles";

#[derive(Debug, Clone)]
pub struct ProfileRepository {
    client: Arc<StoreClient>,
}

impl ProfileRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        let filters = [("id", eq(id))];
        self.client.select_one(TABLE, &filters).await
    }

    /// Update display name and phone; None when the profile row is missing.
    pub async fn update(
        &self,
        id: &str,
        data: &ProfileData,
    ) -> Result<Option<Profile>, StoreError> {
        let filters = [("id", eq(id))];
        let mut rows: Vec<Profile> = self.client.update_returning(TABLE, &filters, data).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }
}
