// --- File: crates/repairtech_auth/src/service.rs ---
//! SessionService implementation backed by the auth collaborator.

use crate::client::AuthClient;
use crate::error::AuthError;
use repairtech_common::services::{BoxFuture, SessionService, SessionUser};
use std::sync::Arc;

/// Adapter exposing [`AuthClient`] through the common `SessionService`
/// trait for consumers that only care about "who is this token".
#[derive(Clone)]
pub struct CollaboratorSessionService {
    client: Arc<AuthClient>,
}

impl CollaboratorSessionService {
    pub fn new(client: Arc<AuthClient>) -> Self {
        Self { client }
    }
}

impl SessionService for CollaboratorSessionService {
    type Error = AuthError;

    fn current_user(&self, access_token: &str) -> BoxFuture<'_, SessionUser, Self::Error> {
        let token = access_token.to_string();
        Box::pin(async move {
            let user = self.client.get_user(&token).await?;
            Ok(SessionUser {
                id: user.id,
                email: user.email,
                confirmed_at: user.confirmed_at,
            })
        })
    }
}
