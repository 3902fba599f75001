// --- File: crates/repairtech_auth/src/client.rs ---
//! Thin client for the external authentication collaborator.
//!
//! Credential storage, hashing, session issuance and the confirmation-email
//! flow all live on the collaborator's side; this client only calls the
//! operations the application consumes: password sign-in, sign-up with a
//! redirect URL and user metadata, sign-out, current-user resolution,
//! confirmation resend, and the authorization-code exchange.

use crate::error::AuthError;
use repairtech_common::HTTP_CLIENT;
use repairtech_config::AuthConfig;
use repairtech_core::forms::{LoginCredentials, Registration};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

/// An issued session, as returned by the token endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// The collaborator's view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    /// Set once the confirmation link was clicked.
    pub confirmed_at: Option<String>,
}

/// Result of a sign-up call: an account, and possibly a session right away
/// when the collaborator does not require confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SignUpResult {
    pub user: AuthUser,
    pub session: Option<Session>,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    api_key: String,
    redirect_url: Option<String>,
}

impl AuthClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.anon_key.clone(),
            redirect_url: config.redirect_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Where the confirmation email should send the user back to.
    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    async fn read_error(response: reqwest::Response) -> AuthError {
        let status = response.status().as_u16();
        let body_text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<serde_json::Value>(&body_text) {
            Ok(body) => body
                .get("error_description")
                .or_else(|| body.get("msg"))
                .or_else(|| body.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(&body_text)
                .to_string(),
            Err(_) => body_text,
        };
        error!("Auth API request failed: {} - {}", status, message);

        // The source system routes both of these provider messages into the
        // "confirm your email" flow with a resend action.
        if message.contains("Email not confirmed") || message.contains("Invalid login credentials")
        {
            return AuthError::EmailNotConfirmed {
                provider_message: message,
            };
        }
        AuthError::ApiError {
            status_code: status,
            message,
        }
    }

    /// Password sign-in. Validated credentials only.
    pub async fn sign_in_with_password(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Session, AuthError> {
        debug!("signing in {}", credentials.email);
        let response = HTTP_CLIENT
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;
        Ok(serde_json::from_str(&body_text)?)
    }

    /// Sign up with the confirmation redirect URL and profile metadata the
    /// backend's trigger uses to seed the profile row.
    pub async fn sign_up(&self, registration: &Registration) -> Result<SignUpResult, AuthError> {
        debug!("signing up {}", registration.email);
        let mut request = HTTP_CLIENT
            .post(self.endpoint("signup"))
            .header("apikey", &self.api_key);
        if let Some(redirect) = &self.redirect_url {
            request = request.query(&[("redirect_to", redirect)]);
        }
        let response = request
            .json(&json!({
                "email": registration.email,
                "password": registration.password,
                "data": {
                    "full_name": registration.full_name,
                    "phone": registration.phone,
                },
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;

        // Confirmation-required sign-ups return just the user; immediate
        // sign-ups return a full session envelope.
        if let Ok(session) = serde_json::from_str::<Session>(&body_text) {
            return Ok(SignUpResult {
                user: session.user.clone(),
                session: Some(session),
            });
        }
        let user: AuthUser = serde_json::from_str(&body_text)?;
        Ok(SignUpResult {
            user,
            session: None,
        })
    }

    /// Resolve the account behind a session token.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let response = HTTP_CLIENT
            .get(self.endpoint("user"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status().as_u16() == 401 || response.status().as_u16() == 403 {
            return Err(AuthError::InvalidSession);
        }
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;
        Ok(serde_json::from_str(&body_text)?)
    }

    /// Invalidate the session behind a token.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = HTTP_CLIENT
            .post(self.endpoint("logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(())
    }

    /// Resend the signup confirmation email.
    pub async fn resend_confirmation(&self, email: &str) -> Result<(), AuthError> {
        let mut request = HTTP_CLIENT
            .post(self.endpoint("resend"))
            .header("apikey", &self.api_key);
        if let Some(redirect) = &self.redirect_url {
            request = request.query(&[("redirect_to", redirect)]);
        }
        let response = request
            .json(&json!({ "type": "signup", "email": email }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(())
    }

    /// Exchange an authorization code from the confirmation redirect for a
    /// session.
    pub async fn exchange_code_for_session(&self, code: &str) -> Result<Session, AuthError> {
        let response = HTTP_CLIENT
            .post(self.endpoint("token"))
            .query(&[("grant_type", "authorization_code")])
            .header("apikey", &self.api_key)
            .json(&json!({ "auth_code": code }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        let body_text = response.text().await?;
        Ok(serde_json::from_str(&body_text)?)
    }
}
