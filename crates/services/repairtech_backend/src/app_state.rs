// --- File: crates/services/repairtech_backend/src/app_state.rs ---
use crate::service_factory::RepairTechServiceFactory;
use repairtech_config::AppConfig;
use std::sync::Arc;

/// Application state shared across routers.
///
/// Holds the configuration and the one service factory instance; routers
/// pull collaborator clients from here instead of constructing their own.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,
    pub service_factory: Arc<RepairTechServiceFactory>,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(RepairTechServiceFactory::new(config.clone()));
        Self {
            config,
            service_factory,
        }
    }
}
