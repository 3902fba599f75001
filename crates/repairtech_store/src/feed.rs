// --- File: crates/repairtech_store/src/feed.rs ---
//! Change-feed subscription for notification rows.
//!
//! The collaborator's row-change stream is consumed through an explicit
//! subscribe/unsubscribe interface scoped to the lifetime of whatever view
//! needs it. A subscription owns its worker task: dropping the handle (or
//! calling [`Subscription::unsubscribe`]) tears the worker down, so a
//! forgotten subscription cannot leak a poller.
//!
//! Transport: the worker polls the unread count for the subscribed user and
//! emits an event whenever it changes. The first observation is always
//! emitted so consumers can render an initial badge without a second query.

use crate::repositories::NotificationRepository;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Default poll interval when the config does not set one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// One observed change for the subscribed user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEvent {
    pub unread_count: u64,
}

/// Factory for per-user notification subscriptions.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    notifications: NotificationRepository,
    poll_interval: Duration,
}

impl NotificationFeed {
    pub fn new(notifications: NotificationRepository, poll_interval: Duration) -> Self {
        Self {
            notifications,
            poll_interval,
        }
    }

    /// Start watching changes for one user.
    ///
    /// Events are delivered on the returned handle's channel; the worker
    /// stops as soon as the handle is dropped or unsubscribed.
    pub fn subscribe(&self, user_id: &str) -> Subscription {
        let (sender, receiver) = mpsc::channel(16);
        let notifications = self.notifications.clone();
        let user_id = user_id.to_string();
        let poll_interval = self.poll_interval;

        let worker: JoinHandle<()> = tokio::spawn(async move {
            let mut last_seen: Option<u64> = None;
            let mut ticker = tokio::time::interval(poll_interval);
            loop {
                ticker.tick().await;
                let count = match notifications.unread_count(&user_id).await {
                    Ok(count) => count,
                    Err(err) => {
                        // Transient collaborator failures keep the
                        // subscription alive; the next tick retries.
                        warn!("change feed poll failed for {}: {}", user_id, err);
                        continue;
                    }
                };
                if last_seen == Some(count) {
                    continue;
                }
                last_seen = Some(count);
                if sender
                    .send(FeedEvent {
                        unread_count: count,
                    })
                    .await
                    .is_err()
                {
                    debug!("change feed receiver for {} closed, stopping", user_id);
                    break;
                }
            }
        });

        Subscription { receiver, worker }
    }
}

/// A live subscription. Holds the worker; dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<FeedEvent>,
    worker: JoinHandle<()>,
}

impl Subscription {
    /// Wait for the next change event. None once the feed has stopped.
    pub async fn recv(&mut self) -> Option<FeedEvent> {
        self.receiver.recv().await
    }

    /// Explicit teardown. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {
        self.worker.abort();
    }

    /// Whether the worker is still running.
    pub fn is_active(&self) -> bool {
        !self.worker.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
