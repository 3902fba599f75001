// --- File: crates/repairtech_store/src/lib.rs ---
//! Client for the managed storage collaborator.
//!
//! Everything durable lives on the other side of this crate: table storage
//! with row-level filtering by owner, server-generated ticket numbers and
//! timestamps, and the row-change stream behind the notification feed.

pub mod client;
pub mod error;
pub mod feed;
pub mod repositories;

// Re-export for the crates composing the service
pub use client::{eq, StoreClient};
pub use error::StoreError;
pub use feed::{FeedEvent, NotificationFeed, Subscription, DEFAULT_POLL_INTERVAL};
pub use repositories::{NotificationRepository, ProfileRepository, RepairRecordRepository};
