// --- File: crates/repairtech_records/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::TrackResponse;
use crate::logic::{DashboardSummary, ListQuery};
use repairtech_core::forms::{RepairRecordForm, TrackTicketForm};
use repairtech_core::{Notification, RepairRecord};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/records", // Path relative to /api
    request_body = RepairRecordForm,
    responses(
        (status = 201, description = "Record created, ticket assigned", body = RepairRecord),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "No valid session")
    ),
    tag = "Records"
)]
fn doc_create_record_handler() {}

#[utoipa::path(
    get,
    path = "/records", // Path relative to /api
    params(ListQuery),
    responses(
        (status = 200, description = "The owner's records, filtered and sorted", body = [RepairRecord]),
        (status = 401, description = "No valid session")
    ),
    tag = "Records"
)]
fn doc_list_records_handler() {}

#[utoipa::path(
    get,
    path = "/records/{id}", // Path relative to /api
    responses(
        (status = 200, description = "One of the owner's records", body = RepairRecord),
        (status = 404, description = "Not found for this owner")
    ),
    tag = "Records"
)]
fn doc_get_record_handler() {}

#[utoipa::path(
    put,
    path = "/records/{id}", // Path relative to /api
    request_body = RepairRecordForm,
    responses(
        (status = 200, description = "Record updated", body = RepairRecord),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Not found for this owner")
    ),
    tag = "Records"
)]
fn doc_update_record_handler() {}

#[utoipa::path(
    delete,
    path = "/records/{id}", // Path relative to /api
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "Not found for this owner")
    ),
    tag = "Records"
)]
fn doc_delete_record_handler() {}

#[utoipa::path(
    get,
    path = "/dashboard/summary", // Path relative to /api
    responses(
        (status = 200, description = "Per-status counts for the owner", body = DashboardSummary)
    ),
    tag = "Records"
)]
fn doc_dashboard_summary_handler() {}

#[utoipa::path(
    post,
    path = "/track", // Path relative to /api
    request_body = TrackTicketForm,
    responses(
        (status = 200, description = "Record behind the ticket number", body = TrackResponse),
        (status = 404, description = "Malformed ticket or no match")
    ),
    tag = "Tracking"
)]
fn doc_track_handler() {}

#[utoipa::path(
    get,
    path = "/notifications", // Path relative to /api
    responses(
        (status = 200, description = "The user's notifications, newest first", body = [Notification])
    ),
    tag = "Notifications"
)]
fn doc_list_notifications_handler() {}

#[utoipa::path(
    get,
    path = "/notifications/watch", // Path relative to /api
    responses(
        (status = 200, description = "Server-sent events with the unread count on every change", content_type = "text/event-stream")
    ),
    tag = "Notifications"
)]
fn doc_watch_notifications_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_record_handler,
        doc_list_records_handler,
        doc_get_record_handler,
        doc_update_record_handler,
        doc_delete_record_handler,
        doc_dashboard_summary_handler,
        doc_track_handler,
        doc_list_notifications_handler,
        doc_watch_notifications_handler,
    ),
    components(schemas(RepairRecord, RepairRecordForm, TrackTicketForm, TrackResponse, DashboardSummary, Notification)),
    tags(
        (name = "Records", description = "Repair record management"),
        (name = "Tracking", description = "Public ticket lookup"),
        (name = "Notifications", description = "Per-user notifications"),
    )
)]
pub struct RecordsApiDoc;
