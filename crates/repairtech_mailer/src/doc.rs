// --- File: crates/repairtech_mailer/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::client::SendEmailResponse;
use crate::logic::TicketEmail;
use serde_json::json;
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/send-ticket-email", // Path relative to /api
    request_body(content = TicketEmail, example = json!({
        "customerEmail": "juan@ejemplo.com",
        "customerName": "Juan Pérez",
        "ticketNumber": "RT-20250615-0007",
        "brand": "Dell",
        "model": "Inspiron 15",
        "issueDescription": "No enciende después de una caída"
    })),
    responses(
        (status = 200, description = "Email accepted by the provider"),
        (status = 400, description = "Missing customer email or ticket number"),
        (status = 500, description = "Send failure or missing server configuration")
    ),
    tag = "Mailer"
)]
fn doc_send_ticket_email_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_send_ticket_email_handler),
    components(schemas(TicketEmail, SendEmailResponse)),
    tags((name = "Mailer", description = "Outbound transactional email"))
)]
pub struct MailerApiDoc;
