// --- File: crates/repairtech_mailer/src/handlers.rs ---
use crate::client::MailerClient;
use crate::error::MailerError;
use crate::logic::{send_ticket_email, TicketEmail};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use repairtech_config::AppConfig;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

// --- State for Mailer Handlers ---
#[derive(Clone)]
pub struct MailerState {
    pub config: Arc<AppConfig>,
    /// Absent when the mailer section is not configured; the handler then
    /// answers with a configuration error instead of panicking.
    pub client: Option<Arc<MailerClient>>,
}

/// Axum handler for the ticket email endpoint.
///
/// Response contract, kept stable for external callers:
/// `200 {"success": true, "data": {...}}`, `400 {"error": ...}` when the
/// required fields are missing, `500 {"error": ...}` on a send failure or
/// missing server configuration.
#[axum::debug_handler]
pub async fn send_ticket_email_handler(
    State(state): State<Arc<MailerState>>,
    Json(payload): Json<TicketEmail>,
) -> Response {
    if !state.config.use_mailer {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "Mailer service is disabled." })),
        )
            .into_response();
    }

    let Some(client) = state.client.as_ref() else {
        error!("ticket email requested but mailer is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Configuración del servidor incompleta" })),
        )
            .into_response();
    };

    if !payload.is_sendable() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Faltan datos requeridos" })),
        )
            .into_response();
    }

    match send_ticket_email(client, &payload).await {
        Ok(response) => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": response })),
        )
            .into_response(),
        Err(MailerError::ConfigError) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Configuración del servidor incompleta" })),
        )
            .into_response(),
        Err(MailerError::ApiError { message, .. }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response(),
        Err(err) => {
            error!("ticket email send failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error al enviar el email" })),
            )
                .into_response()
        }
    }
}
