// --- File: crates/repairtech_auth/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::client::{AuthUser, Session};
use crate::handlers::{
    CallbackQuery, LoginResponse, RegisterResponse, ResendConfirmationRequest,
};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/auth/login", // Path relative to /api
    responses(
        (status = 200, description = "Session issued", body = LoginResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Bad credentials or unconfirmed email"),
        (status = 503, description = "Auth service disabled")
    ),
    tag = "Auth"
)]
fn doc_login_handler() {}

#[utoipa::path(
    post,
    path = "/auth/register", // Path relative to /api
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Validation failed"),
        (status = 503, description = "Auth service disabled")
    ),
    tag = "Auth"
)]
fn doc_register_handler() {}

#[utoipa::path(
    post,
    path = "/auth/logout", // Path relative to /api
    responses(
        (status = 204, description = "Session invalidated"),
        (status = 401, description = "No valid session")
    ),
    tag = "Auth"
)]
fn doc_logout_handler() {}

#[utoipa::path(
    post,
    path = "/auth/resend-confirmation", // Path relative to /api
    request_body = ResendConfirmationRequest,
    responses(
        (status = 200, description = "Confirmation email resent"),
        (status = 400, description = "Missing email")
    ),
    tag = "Auth"
)]
fn doc_resend_confirmation_handler() {}

#[utoipa::path(
    get,
    path = "/auth/callback", // Path relative to /api
    params(CallbackQuery),
    responses(
        (status = 303, description = "Redirect to the dashboard, or back to login with the error")
    ),
    tag = "Auth"
)]
fn doc_callback_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_login_handler,
        doc_register_handler,
        doc_logout_handler,
        doc_resend_confirmation_handler,
        doc_callback_handler,
    ),
    components(schemas(LoginResponse, RegisterResponse, ResendConfirmationRequest, Session, AuthUser)),
    tags((name = "Auth", description = "Authentication and profile endpoints"))
)]
pub struct AuthApiDoc;
