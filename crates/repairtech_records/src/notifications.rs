// --- File: crates/repairtech_records/src/notifications.rs ---
//! Notification endpoints: list, read flags and the unread badge count.
//! Rows originate from storage-side triggers; nothing here creates one.

use crate::error::RecordsError;
use crate::handlers::RecordsState;
use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    response::{IntoResponse, Json, Response},
    Extension,
};
use futures::stream::Stream;
use repairtech_auth::CurrentUser;
use repairtech_common::RepairTechError;
use repairtech_core::Notification;
use repairtech_store::{NotificationFeed, DEFAULT_POLL_INTERVAL};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

fn into_error_response(err: RecordsError) -> Response {
    RepairTechError::from(err).into_response()
}

/// Axum handler listing the user's notifications, newest first.
#[axum::debug_handler]
pub async fn list_notifications_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Notification>>, Response> {
    state
        .notifications
        .list_for_user(&user.id)
        .await
        .map(Json)
        .map_err(|err| into_error_response(err.into()))
}

/// Axum handler for the unread badge count.
#[axum::debug_handler]
pub async fn unread_count_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<serde_json::Value>, Response> {
    let count = state
        .notifications
        .unread_count(&user.id)
        .await
        .map_err(|err| into_error_response(err.into()))?;
    Ok(Json(json!({ "count": count })))
}

/// Axum handler marking one notification read.
#[axum::debug_handler]
pub async fn mark_read_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Notification>, Response> {
    let notification = state
        .notifications
        .mark_read(&user.id, &id)
        .await
        .map_err(|err| into_error_response(err.into()))?
        .ok_or_else(|| into_error_response(RecordsError::NotFound))?;
    Ok(Json(notification))
}

/// Axum handler streaming unread-count changes as server-sent events.
///
/// The subscription lives exactly as long as the response stream: when the
/// client disconnects, the stream is dropped and the feed worker with it.
#[axum::debug_handler]
pub async fn watch_notifications_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let poll_interval = state
        .config
        .store
        .as_ref()
        .and_then(|store| store.feed_poll_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_POLL_INTERVAL);

    let feed = NotificationFeed::new(state.notifications.clone(), poll_interval);
    let subscription = feed.subscribe(&user.id);
    info!("notification watch opened for {}", user.id);

    let stream = futures::stream::unfold(subscription, |mut subscription| async move {
        let event = subscription.recv().await?;
        let sse_event = Event::default()
            .event("unread")
            .data(event.unread_count.to_string());
        Some((Ok::<_, Infallible>(sse_event), subscription))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Axum handler marking every unread notification read.
#[axum::debug_handler]
pub async fn mark_all_read_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<serde_json::Value>, Response> {
    let updated = state
        .notifications
        .mark_all_read(&user.id)
        .await
        .map_err(|err| into_error_response(err.into()))?;
    info!("marked {} notification(s) read for {}", updated, user.id);
    Ok(Json(json!({ "updated": updated })))
}
