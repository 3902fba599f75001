// --- File: crates/repairtech_mailer/src/client.rs ---
//! Client for the transactional-email provider.
//!
//! One operation: send(from, to, subject, rendered body). The provider
//! answers with the message id on success or an error object whose message
//! is carried through as-is.

use crate::error::MailerError;
use repairtech_common::HTTP_CLIENT;
use repairtech_config::MailerConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use tracing::{debug, error};

/// Hosted endpoint used when the config does not override it.
const DEFAULT_API_URL: &str = "https://api.resend.com";

/// Environment variable holding the provider API key.
const API_KEY_VAR: &str = "MAILER_API_KEY";

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SendEmailResponse {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct MailerClient {
    api_url: String,
    from: String,
    reply_to: Option<String>,
}

impl MailerClient {
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            api_url: config
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            from: config.from.clone(),
            reply_to: config.reply_to.clone(),
        }
    }

    /// Send one email with a pre-rendered HTML body.
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<SendEmailResponse, MailerError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| MailerError::ConfigError)?;

        let mut body = json!({
            "from": self.from,
            "to": [to],
            "subject": subject,
            "html": html_body,
        });
        if let Some(reply_to) = &self.reply_to {
            body["reply_to"] = json!(reply_to);
        }

        debug!("sending email to {} via {}", to, self.api_url);
        let response = HTTP_CLIENT
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if status.is_success() {
            Ok(serde_json::from_str(&body_text)?)
        } else {
            let message = match serde_json::from_str::<serde_json::Value>(&body_text) {
                Ok(json_body) => json_body
                    .get("message")
                    .or_else(|| json_body.get("error").and_then(|e| e.get("message")))
                    .and_then(|m| m.as_str())
                    .unwrap_or(&body_text)
                    .to_string(),
                Err(_) => body_text,
            };
            error!(
                "email provider rejected send to {}: {} - {}",
                to, status, message
            );
            Err(MailerError::ApiError {
                status_code: status.as_u16(),
                message,
            })
        }
    }
}
