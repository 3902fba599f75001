// --- File: crates/repairtech_auth/src/handlers.rs ---
use crate::client::{AuthClient, AuthUser, Session};
use crate::error::AuthError;
use crate::gate::SessionToken;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Extension,
};
use repairtech_common::RepairTechError;
use repairtech_config::AppConfig;
use repairtech_core::forms::{LoginForm, RegisterForm};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

// --- State for Auth Handlers ---
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AppConfig>,
    pub client: Arc<AuthClient>,
    pub profiles: repairtech_store::ProfileRepository,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.access_token,
            token_type: session.token_type,
            refresh_token: session.refresh_token,
            user: session.user,
        }
    }
}

/// Axum handler for password sign-in.
///
/// The unconfirmed-email case gets its own response shape so clients can
/// offer the resend action next to the message.
#[axum::debug_handler]
pub async fn login_handler(
    State(state): State<Arc<AuthState>>,
    Json(payload): Json<LoginForm>,
) -> Result<Json<LoginResponse>, Response> {
    if !state.config.use_auth {
        return Err(
            (StatusCode::SERVICE_UNAVAILABLE, "Auth service is disabled.").into_response(),
        );
    }

    let credentials = payload
        .validate()
        .map_err(|errors| RepairTechError::from(errors).into_response())?;

    match state.client.sign_in_with_password(&credentials).await {
        Ok(session) => {
            info!("user {} signed in", session.user.id);
            Ok(Json(session.into()))
        }
        Err(err @ AuthError::EmailNotConfirmed { .. }) => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": { "message": err.to_string(), "code": 401 },
                "email_not_confirmed": true,
            })),
        )
            .into_response()),
        Err(err) => {
            error!("login failed for {}: {}", credentials.email, err);
            Err(RepairTechError::from(err).into_response())
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterResponse {
    pub user: AuthUser,
    /// True when the collaborator sent a confirmation email and the account
    /// cannot sign in until the link is clicked.
    pub needs_confirmation: bool,
}

/// Axum handler for account registration.
#[axum::debug_handler]
pub async fn register_handler(
    State(state): State<Arc<AuthState>>,
    Json(payload): Json<RegisterForm>,
) -> Result<(StatusCode, Json<RegisterResponse>), Response> {
    if !state.config.use_auth {
        return Err(
            (StatusCode::SERVICE_UNAVAILABLE, "Auth service is disabled.").into_response(),
        );
    }

    let registration = payload
        .validate()
        .map_err(|errors| RepairTechError::from(errors).into_response())?;

    let result = state
        .client
        .sign_up(&registration)
        .await
        .map_err(|err| RepairTechError::from(err).into_response())?;

    let needs_confirmation = result.session.is_none() && result.user.confirmed_at.is_none();
    info!(
        "registered {} (needs_confirmation: {})",
        result.user.id, needs_confirmation
    );
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: result.user,
            needs_confirmation,
        }),
    ))
}

/// Axum handler for sign-out. Gated; the token comes from the session gate.
#[axum::debug_handler]
pub async fn logout_handler(
    State(state): State<Arc<AuthState>>,
    Extension(token): Extension<SessionToken>,
) -> Result<StatusCode, Response> {
    state
        .client
        .sign_out(&token.0)
        .await
        .map_err(|err| RepairTechError::from(err).into_response())?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResendConfirmationRequest {
    #[serde(default)]
    pub email: String,
}

/// Axum handler to resend the signup confirmation email.
#[axum::debug_handler]
pub async fn resend_confirmation_handler(
    State(state): State<Arc<AuthState>>,
    Json(payload): Json<ResendConfirmationRequest>,
) -> Result<Json<serde_json::Value>, Response> {
    if payload.email.trim().is_empty() {
        return Err(repairtech_common::field_error(
            "email",
            "Por favor ingresa tu correo electrónico",
        )
        .into_response());
    }

    state
        .client
        .resend_confirmation(payload.email.trim())
        .await
        .map_err(|err| RepairTechError::from(err).into_response())?;
    Ok(Json(json!({ "success": true })))
}

// --- Confirmation callback (authorization-code exchange) ---

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

fn app_url(config: &AppConfig, path: &str) -> String {
    match config.app.as_ref() {
        Some(app) => format!("{}{}", app.public_url.trim_end_matches('/'), path),
        None => path.to_string(),
    }
}

fn login_redirect_with_error(config: &AppConfig, message: &str) -> Redirect {
    let login_path = config
        .app
        .as_ref()
        .map(|app| app.login_path.clone())
        .unwrap_or_else(|| "/auth/login".to_string());
    let target = format!(
        "{}?error={}",
        app_url(config, &login_path),
        urlencode(message)
    );
    Redirect::to(&target)
}

/// Minimal percent-encoding for the error query value.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Axum handler for the auth callback: exchanges the authorization code for
/// a session and sends the user onwards. Errors bounce back to login with
/// the message attached, mirroring the entry flow.
#[axum::debug_handler]
pub async fn callback_handler(
    State(state): State<Arc<AuthState>>,
    Query(params): Query<CallbackQuery>,
) -> Redirect {
    if let Some(error) = params.error {
        let description = params.error_description.unwrap_or_else(|| error.clone());
        error!("auth callback error: {} - {}", error, description);
        return login_redirect_with_error(&state.config, &description);
    }

    let Some(code) = params.code else {
        return login_redirect_with_error(&state.config, "Código de autorización faltante");
    };

    match state.client.exchange_code_for_session(&code).await {
        Ok(session) => {
            info!("auth code exchanged for user {}", session.user.id);
            let dashboard_path = state
                .config
                .app
                .as_ref()
                .map(|app| app.dashboard_path.clone())
                .unwrap_or_else(|| "/dashboard".to_string());
            Redirect::to(&app_url(&state.config, &dashboard_path))
        }
        Err(err) => {
            error!("auth code exchange failed: {}", err);
            login_redirect_with_error(&state.config, &err.to_string())
        }
    }
}
