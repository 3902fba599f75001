// --- File: crates/services/repairtech_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds each collaborator client once, according to compile-time features
//! and runtime flags, and hands them out to the routers. The common
//! `ServiceFactory` trait view is kept for consumers that only need the
//! service abstractions.
use repairtech_config::AppConfig;
use std::sync::Arc;
#[allow(unused_imports)]
use {
    repairtech_common::is_feature_enabled,
    repairtech_common::services::{
        BoxFuture, BoxedError, MailResult, MailService, ServiceFactory, SessionService,
        SessionUser,
    },
    tracing::{error, info, warn},
};

#[cfg(feature = "store")]
use repairtech_store::StoreClient;

#[cfg(feature = "auth")]
use repairtech_auth::{AuthClient, CollaboratorSessionService};

#[cfg(feature = "mailer")]
use repairtech_mailer::{CollaboratorMailService, MailerClient};

/// Service factory for the backend binary.
///
/// Clients exist only when their feature is compiled in, their runtime flag
/// is on, and their configuration section is present; routers check for
/// `None` and stay unmounted otherwise.
pub struct RepairTechServiceFactory {
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    #[cfg(feature = "store")]
    store_client: Option<Arc<StoreClient>>,
    #[cfg(feature = "auth")]
    auth_client: Option<Arc<AuthClient>>,
    #[cfg(feature = "mailer")]
    mailer_client: Option<Arc<MailerClient>>,
}

impl RepairTechServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        #[allow(unused_mut)]
        let mut factory = Self {
            config: config.clone(),
            #[cfg(feature = "store")]
            store_client: None,
            #[cfg(feature = "auth")]
            auth_client: None,
            #[cfg(feature = "mailer")]
            mailer_client: None,
        };

        #[cfg(feature = "store")]
        {
            if is_feature_enabled(&config, config.use_store, config.store.as_ref()) {
                info!("ℹ️ Initializing storage collaborator client...");
                let client = StoreClient::new(config.store.as_ref().unwrap());
                factory.store_client = Some(Arc::new(client));
                info!("✅ Storage client initialized.");
            } else {
                info!("ℹ️ Store feature compiled, but disabled via runtime config or missing store config section.");
            }
        }

        #[cfg(feature = "auth")]
        {
            if is_feature_enabled(&config, config.use_auth, config.auth.as_ref()) {
                info!("ℹ️ Initializing auth collaborator client...");
                let client = AuthClient::new(config.auth.as_ref().unwrap());
                factory.auth_client = Some(Arc::new(client));
                info!("✅ Auth client initialized.");
            } else {
                info!("ℹ️ Auth feature compiled, but disabled via runtime config or missing auth config section.");
            }
        }

        #[cfg(feature = "mailer")]
        {
            if is_feature_enabled(&config, config.use_mailer, config.mailer.as_ref()) {
                info!("ℹ️ Initializing mailer client...");
                let client = MailerClient::new(config.mailer.as_ref().unwrap());
                factory.mailer_client = Some(Arc::new(client));
                info!("✅ Mailer client initialized.");
            } else {
                info!("ℹ️ Mailer feature compiled, but disabled via runtime config or missing mailer config section.");
            }
        }

        factory
    }

    #[cfg(feature = "store")]
    pub fn store_client(&self) -> Option<Arc<StoreClient>> {
        self.store_client.clone()
    }

    #[cfg(feature = "auth")]
    pub fn auth_client(&self) -> Option<Arc<AuthClient>> {
        self.auth_client.clone()
    }

    #[cfg(feature = "mailer")]
    pub fn mailer_client(&self) -> Option<Arc<MailerClient>> {
        self.mailer_client.clone()
    }
}

// Wrappers converting the concrete service errors into BoxedError for the
// trait-object view.

#[cfg(feature = "mailer")]
struct BoxedMailService {
    inner: CollaboratorMailService,
}

#[cfg(feature = "mailer")]
impl MailService for BoxedMailService {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> BoxFuture<'_, MailResult, Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let html_body = html_body.to_string();
        let inner = &self.inner;

        Box::pin(async move {
            inner
                .send_email(&to, &subject, &html_body)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

#[cfg(feature = "auth")]
struct BoxedSessionService {
    inner: CollaboratorSessionService,
}

#[cfg(feature = "auth")]
impl SessionService for BoxedSessionService {
    type Error = BoxedError;

    fn current_user(&self, access_token: &str) -> BoxFuture<'_, SessionUser, Self::Error> {
        let access_token = access_token.to_string();
        let inner = &self.inner;

        Box::pin(async move {
            inner
                .current_user(&access_token)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

impl ServiceFactory for RepairTechServiceFactory {
    fn mail_service(&self) -> Option<Arc<dyn MailService<Error = BoxedError>>> {
        #[cfg(feature = "mailer")]
        {
            if let Some(client) = self.mailer_client.clone() {
                return Some(Arc::new(BoxedMailService {
                    inner: CollaboratorMailService::new(client),
                }));
            }
        }

        None
    }

    fn session_service(&self) -> Option<Arc<dyn SessionService<Error = BoxedError>>> {
        #[cfg(feature = "auth")]
        {
            if let Some(client) = self.auth_client.clone() {
                return Some(Arc::new(BoxedSessionService {
                    inner: CollaboratorSessionService::new(client),
                }));
            }
        }

        None
    }
}
