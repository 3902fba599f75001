// --- File: crates/repairtech_auth/src/routes.rs ---

use crate::client::AuthClient;
use crate::gate::{session_gate, AuthGateState};
use crate::handlers::{
    callback_handler, login_handler, logout_handler, register_handler,
    resend_confirmation_handler, AuthState,
};
use crate::profile::{get_profile_handler, update_profile_handler};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use repairtech_config::AppConfig;
use repairtech_store::{ProfileRepository, StoreClient};
use std::sync::Arc;

/// Creates a router containing all routes for the auth feature.
///
/// Login, registration, confirmation resend and the callback exchange are
/// public; logout and the profile endpoints sit behind the session gate.
pub fn routes(
    config: Arc<AppConfig>,
    client: Arc<AuthClient>,
    store: Arc<StoreClient>,
) -> Router {
    let auth_state = Arc::new(AuthState {
        config: config.clone(),
        client: client.clone(),
        profiles: ProfileRepository::new(store),
    });
    let gate_state = Arc::new(AuthGateState { config, client });

    let public = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/resend-confirmation", post(resend_confirmation_handler))
        .route("/auth/callback", get(callback_handler))
        .with_state(auth_state.clone());

    let protected = Router::new()
        .route("/auth/logout", post(logout_handler))
        .route(
            "/profile",
            get(get_profile_handler).put(update_profile_handler),
        )
        .with_state(auth_state)
        .layer(middleware::from_fn_with_state(gate_state, session_gate));

    public.merge(protected)
}
