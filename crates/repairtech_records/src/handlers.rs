// --- File: crates/repairtech_records/src/handlers.rs ---
use crate::error::RecordsError;
use crate::logic::{
    dashboard_summary, filter_and_sort, lookup_by_ticket, DashboardSummary, ListQuery,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use repairtech_auth::CurrentUser;
use repairtech_common::RepairTechError;
use repairtech_config::AppConfig;
use repairtech_core::forms::{RepairRecordForm, TrackTicketForm};
use repairtech_core::{display, RepairRecord, StatusDisplay};
use repairtech_mailer::{dispatch_ticket_email, MailerClient, TicketEmail};
use repairtech_store::{NotificationRepository, RepairRecordRepository};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

// --- State for Record Handlers ---
#[derive(Clone)]
pub struct RecordsState {
    pub config: Arc<AppConfig>,
    pub records: RepairRecordRepository,
    pub notifications: NotificationRepository,
    /// Present when the mailer feature is configured; creation falls back
    /// to a logged skip otherwise.
    pub mailer: Option<Arc<MailerClient>>,
}

fn into_error_response(err: RecordsError) -> Response {
    RepairTechError::from(err).into_response()
}

/// Axum handler to register a repair record.
///
/// Validate, persist, then fire the ticket email without awaiting it: the
/// creation result does not depend on the provider in any way.
#[axum::debug_handler]
pub async fn create_record_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<RepairRecordForm>,
) -> Result<(StatusCode, Json<RepairRecord>), Response> {
    let data = payload
        .validate()
        .map_err(|errors| into_error_response(errors.into()))?;

    let record = state
        .records
        .insert(&user.id, &data)
        .await
        .map_err(|err| into_error_response(err.into()))?;

    info!(
        "record {} created with ticket {:?}",
        record.id, record.ticket_number
    );

    match (&state.mailer, &record.ticket_number) {
        (Some(mailer), Some(ticket_number)) => {
            dispatch_ticket_email(
                mailer.clone(),
                TicketEmail {
                    customer_email: record.customer_email.clone(),
                    customer_name: record.customer_name.clone(),
                    ticket_number: ticket_number.clone(),
                    brand: record.brand.clone(),
                    model: record.model.clone(),
                    issue_description: record.issue_description.clone(),
                },
            );
        }
        _ => info!(
            "skipping ticket email for record {}: mailer disabled or no ticket assigned",
            record.id
        ),
    }

    Ok((StatusCode::CREATED, Json(record)))
}

/// Axum handler listing the owner's records with explicit query state.
#[axum::debug_handler]
pub async fn list_records_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<RepairRecord>>, Response> {
    let records = state
        .records
        .list_for_owner(&user.id)
        .await
        .map_err(|err| into_error_response(err.into()))?;
    Ok(Json(filter_and_sort(records, &query)))
}

/// Axum handler fetching one of the owner's records.
#[axum::debug_handler]
pub async fn get_record_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<RepairRecord>, Response> {
    let record = state
        .records
        .find_by_id(&user.id, &id)
        .await
        .map_err(|err| into_error_response(err.into()))?
        .ok_or_else(|| into_error_response(RecordsError::NotFound))?;
    Ok(Json(record))
}

/// Axum handler updating one of the owner's records. The full validated
/// field set is written; the ticket number is untouchable by construction.
#[axum::debug_handler]
pub async fn update_record_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<RepairRecordForm>,
) -> Result<Json<RepairRecord>, Response> {
    let data = payload
        .validate()
        .map_err(|errors| into_error_response(errors.into()))?;

    let record = state
        .records
        .update(&user.id, &id, &data)
        .await
        .map_err(|err| into_error_response(err.into()))?
        .ok_or_else(|| into_error_response(RecordsError::NotFound))?;

    info!("record {} updated", record.id);
    Ok(Json(record))
}

/// Axum handler deleting one of the owner's records.
#[axum::debug_handler]
pub async fn delete_record_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, Response> {
    let deleted = state
        .records
        .delete(&user.id, &id)
        .await
        .map_err(|err| into_error_response(err.into()))?;
    if !deleted {
        return Err(into_error_response(RecordsError::NotFound));
    }
    info!("record {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Axum handler for the owner's dashboard counts.
#[axum::debug_handler]
pub async fn dashboard_summary_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<DashboardSummary>, Response> {
    dashboard_summary(&state.records, &user.id)
        .await
        .map(Json)
        .map_err(into_error_response)
}

// --- Public ticket tracking ---

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TrackResponse {
    pub record: RepairRecord,
    pub status_display: StatusDisplay,
}

/// Axum handler for the public status lookup.
///
/// Malformed tickets and lookup misses produce the same payload so the
/// tracking page shows one message either way; the log line records which
/// it actually was.
#[axum::debug_handler]
pub async fn track_handler(
    State(state): State<Arc<RecordsState>>,
    Json(payload): Json<TrackTicketForm>,
) -> Result<Json<TrackResponse>, Response> {
    match lookup_by_ticket(&state.records, &payload.ticket_number).await {
        Ok(record) => {
            let status_display = display(record.status);
            Ok(Json(TrackResponse {
                record,
                status_display,
            }))
        }
        Err(err @ (RecordsError::InvalidTicket(_) | RecordsError::NotFound)) => {
            info!("track lookup rejected: {}", err);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": {
                        "message": "Ticket no encontrado",
                        "code": 404,
                    }
                })),
            )
                .into_response())
        }
        Err(err) => {
            error!("track lookup failed: {}", err);
            Err(into_error_response(err))
        }
    }
}
