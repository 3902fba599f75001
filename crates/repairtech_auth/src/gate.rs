// --- File: crates/repairtech_auth/src/gate.rs ---
//! Session gate for protected routes.
//!
//! Every protected view requires a currently-valid session. The gate pulls
//! the bearer token off the request, asks the auth collaborator who it
//! belongs to, and injects the answer as a request extension. Anything less
//! is a 401 carrying the login entry point, which is all a client needs to
//! route the user back to sign-in.

use crate::client::AuthClient;
use crate::error::AuthError;
use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use repairtech_config::AppConfig;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// The authenticated account for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub confirmed_at: Option<String>,
}

/// State the gate middleware runs with.
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AppConfig>,
    pub client: Arc<AuthClient>,
}

/// Login entry point advertised in 401 responses.
fn login_url(config: &AppConfig) -> String {
    match config.app.as_ref() {
        Some(app) => format!("{}{}", app.public_url.trim_end_matches('/'), app.login_path),
        None => "/auth/login".to_string(),
    }
}

fn unauthorized(config: &AppConfig, err: AuthError) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": {
                "message": err.to_string(),
                "code": 401,
                "login_url": login_url(config),
            }
        })),
    )
        .into_response()
}

/// Extract the bearer token from the Authorization header.
pub fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Axum middleware guarding protected routes.
pub async fn session_gate(
    State(state): State<Arc<AuthGateState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(&req) {
        Some(token) => token.to_string(),
        None => return unauthorized(&state.config, AuthError::MissingToken),
    };

    match state.client.get_user(&token).await {
        Ok(user) => {
            debug!("session resolved to user {}", user.id);
            req.extensions_mut().insert(CurrentUser {
                id: user.id,
                email: user.email,
                confirmed_at: user.confirmed_at,
            });
            // The token travels with the request for handlers that call
            // the collaborator on the user's behalf (sign-out).
            req.extensions_mut().insert(SessionToken(token));
            next.run(req).await
        }
        Err(err) => unauthorized(&state.config, err),
    }
}

/// The raw session token of the current request.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);
