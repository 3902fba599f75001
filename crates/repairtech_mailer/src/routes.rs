// --- File: crates/repairtech_mailer/src/routes.rs ---

use crate::client::MailerClient;
use crate::handlers::{send_ticket_email_handler, MailerState};
use axum::{routing::post, Router};
use repairtech_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the mailer feature.
pub fn routes(config: Arc<AppConfig>, client: Option<Arc<MailerClient>>) -> Router {
    let mailer_state = Arc::new(MailerState { config, client });

    Router::new()
        .route("/send-ticket-email", post(send_ticket_email_handler))
        .with_state(mailer_state)
}
