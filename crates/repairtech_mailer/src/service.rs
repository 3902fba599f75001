// --- File: crates/repairtech_mailer/src/service.rs ---
//! MailService implementation backed by the email provider client.

use crate::client::MailerClient;
use crate::error::MailerError;
use repairtech_common::services::{BoxFuture, MailResult, MailService};
use std::sync::Arc;

/// Adapter exposing [`MailerClient`] through the common `MailService` trait.
#[derive(Clone)]
pub struct CollaboratorMailService {
    client: Arc<MailerClient>,
}

impl CollaboratorMailService {
    pub fn new(client: Arc<MailerClient>) -> Self {
        Self { client }
    }
}

impl MailService for CollaboratorMailService {
    type Error = MailerError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> BoxFuture<'_, MailResult, Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let html_body = html_body.to_string();
        Box::pin(async move {
            let response = self.client.send(&to, &subject, &html_body).await?;
            Ok(MailResult {
                id: response.id,
                status: "sent".to_string(),
            })
        })
    }
}
