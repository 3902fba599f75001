// --- File: crates/repairtech_auth/src/profile.rs ---
//! Profile endpoints. A profile is account-scoped: one row per account,
//! display name and phone editable, email mirrored from the account and
//! read-only here.

use crate::gate::CurrentUser;
use crate::handlers::AuthState;
use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    Extension,
};
use repairtech_common::{not_found, RepairTechError};
use repairtech_core::forms::ProfileForm;
use repairtech_core::Profile;
use std::sync::Arc;
use tracing::info;

/// Axum handler returning the authenticated account's profile.
#[axum::debug_handler]
pub async fn get_profile_handler(
    State(state): State<Arc<AuthState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Profile>, Response> {
    let profile = state
        .profiles
        .find_by_id(&user.id)
        .await
        .map_err(|err| RepairTechError::from(err).into_response())?
        .ok_or_else(|| not_found("Perfil no encontrado").into_response())?;
    Ok(Json(profile))
}

/// Axum handler updating the authenticated account's profile.
#[axum::debug_handler]
pub async fn update_profile_handler(
    State(state): State<Arc<AuthState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ProfileForm>,
) -> Result<Json<Profile>, Response> {
    let data = payload
        .validate()
        .map_err(|errors| RepairTechError::from(errors).into_response())?;

    let profile = state
        .profiles
        .update(&user.id, &data)
        .await
        .map_err(|err| RepairTechError::from(err).into_response())?
        .ok_or_else(|| not_found("Perfil no encontrado").into_response())?;

    info!("profile updated for {}", user.id);
    Ok(Json(profile))
}
