// --- File: crates/repairtech_mailer/src/logic.rs ---
use crate::client::{MailerClient, SendEmailResponse};
use crate::error::MailerError;
use crate::template::{render_ticket_email, TicketEmailData};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

// --- Data Structures ---

/// The ticket email payload. Field names are the public wire contract of
/// the send endpoint, hence camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TicketEmail {
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub ticket_number: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub issue_description: String,
}

impl TicketEmail {
    /// The send requires a recipient and a ticket number; everything else
    /// only shapes the body.
    pub fn is_sendable(&self) -> bool {
        !self.customer_email.is_empty() && !self.ticket_number.is_empty()
    }

    fn subject(&self) -> String {
        format!("Ticket de Reparación #{} - RepairTech", self.ticket_number)
    }
}

// --- Core Logic Functions ---

/// Render and send one ticket email.
pub async fn send_ticket_email(
    client: &MailerClient,
    email: &TicketEmail,
) -> Result<SendEmailResponse, MailerError> {
    let html = render_ticket_email(&TicketEmailData {
        customer_name: &email.customer_name,
        ticket_number: &email.ticket_number,
        brand: &email.brand,
        model: &email.model,
        issue_description: &email.issue_description,
    });

    info!(
        "sending ticket email for {} to {}",
        email.ticket_number, email.customer_email
    );
    client
        .send(&email.customer_email, &email.subject(), &html)
        .await
}

/// Best-effort dispatch after a record was created.
///
/// The send runs on its own task: the record is already committed, and a
/// provider failure must neither roll it back nor fail the caller. The
/// outcome is observable only in the logs.
pub fn dispatch_ticket_email(client: Arc<MailerClient>, email: TicketEmail) {
    if !email.is_sendable() {
        info!(
            "skipping ticket email for {:?}: no recipient or ticket number",
            email.ticket_number
        );
        return;
    }

    tokio::spawn(async move {
        match send_ticket_email(&client, &email).await {
            Ok(response) => info!(
                "ticket email for {} sent (provider id {})",
                email.ticket_number, response.id
            ),
            Err(err) => error!(
                "ticket email for {} to {} failed: {}",
                email.ticket_number, email.customer_email, err
            ),
        }
    });
}
