// --- File: crates/repairtech_store/src/client.rs ---
//! Thin REST client for the managed table storage.
//!
//! The collaborator exposes table-like collections with equality filters as
//! query parameters (`owner_id=eq.<id>`), insert-returning via the `Prefer`
//! header, and exact counts via the `Content-Range` response header. This
//! client wraps exactly those operations; everything transactional
//! (uniqueness, row ownership) stays on the collaborator's side.

use crate::error::StoreError;
use repairtech_common::HTTP_CLIENT;
use repairtech_config::StoreConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

/// An equality filter on one column, pre-encoded for the wire.
pub type Filter = (&'static str, String);

/// Build the `eq.` filter value for a column.
pub fn eq(value: impl AsRef<str>) -> String {
    format!("eq.{}", value.as_ref())
}

#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    api_key: String,
    auth_token: String,
}

impl StoreClient {
    /// Create a client from the storage section of the configuration.
    ///
    /// The service key, when present, is used as the bearer token so
    /// server-side operations see all rows; otherwise the publishable key
    /// is used for both headers.
    pub fn new(config: &StoreConfig) -> Self {
        let auth_token = config
            .service_key
            .clone()
            .unwrap_or_else(|| config.anon_key.clone());
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.anon_key.clone(),
            auth_token,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.auth_token)) {
            headers.insert("Authorization", value);
        }
        headers
    }

    async fn read_error(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body_text = response.text().await.unwrap_or_default();
        // Surface the collaborator's own message when it sends one.
        let message = match serde_json::from_str::<serde_json::Value>(&body_text) {
            Ok(json_body) => json_body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body_text)
                .to_string(),
            Err(_) => body_text,
        };
        error!("Storage API request failed: {} - {}", status, message);
        StoreError::ApiError {
            status_code: status,
            message,
        }
    }

    /// Filtered select, optionally ordered (`"created_at.desc"` form).
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&str>,
    ) -> Result<Vec<T>, StoreError> {
        let mut query: Vec<(&str, String)> = vec![("select", "*".to_string())];
        query.extend(filters.iter().cloned());
        if let Some(order) = order {
            query.push(("order", order.to_string()));
        }

        debug!("select from {} with {} filter(s)", table, filters.len());
        let response = HTTP_CLIENT
            .get(self.table_url(table))
            .headers(self.headers())
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;
        Ok(serde_json::from_str(&body_text)?)
    }

    /// Filtered select expecting at most one row.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
    ) -> Result<Option<T>, StoreError> {
        let mut rows: Vec<T> = self.select(table, filters, None).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Insert one row and return it as stored, server-generated columns
    /// included.
    pub async fn insert_returning<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let response = HTTP_CLIENT
            .post(self.table_url(table))
            .headers(self.headers())
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;
        let mut rows: Vec<T> = serde_json::from_str(&body_text)?;
        if rows.is_empty() {
            return Err(StoreError::ApiError {
                status_code: 500,
                message: "insert returned no representation".to_string(),
            });
        }
        Ok(rows.swap_remove(0))
    }

    /// Update rows matching the filters and return them as stored.
    pub async fn update_returning<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        filters: &[Filter],
        body: &B,
    ) -> Result<Vec<T>, StoreError> {
        let query: Vec<(&str, String)> = filters.to_vec();
        let response = HTTP_CLIENT
            .patch(self.table_url(table))
            .headers(self.headers())
            .header("Prefer", "return=representation")
            .query(&query)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;
        Ok(serde_json::from_str(&body_text)?)
    }

    /// Delete rows matching the filters; true if anything was deleted.
    pub async fn delete(&self, table: &str, filters: &[Filter]) -> Result<bool, StoreError> {
        let query: Vec<(&str, String)> = filters.to_vec();
        let response = HTTP_CLIENT
            .delete(self.table_url(table))
            .headers(self.headers())
            .header("Prefer", "return=representation")
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body_text)?;
        Ok(!rows.is_empty())
    }

    /// Exact count of rows matching the filters, from the `Content-Range`
    /// header (`0-24/57` or `*/0`).
    pub async fn count(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let mut query: Vec<(&str, String)> = vec![("select", "id".to_string())];
        query.extend(filters.iter().cloned());

        let response = HTTP_CLIENT
            .get(self.table_url(table))
            .headers(self.headers())
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let content_range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or(StoreError::MissingCount)?;
        parse_content_range_total(content_range).ok_or(StoreError::MissingCount)
    }
}

/// Total from a `Content-Range` value, e.g. `0-24/57` → 57, `*/0` → 0.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}
