//! Feature flag handling for the RepairTech application.
//!
//! Feature flags are used in two ways:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values
//!
//! ## Available Features
//!
//! - `openapi`: Enables OpenAPI documentation generation
//! - `store`: Enables the storage collaborator client
//! - `auth`: Enables the authentication collaborator client
//! - `mailer`: Enables outbound email

use repairtech_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// A feature is considered enabled when its runtime flag is set and its
/// configuration section is present.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the storage collaborator is enabled at runtime.
#[cfg(feature = "store")]
pub fn is_store_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_store, config.store.as_ref())
}

/// Check if the authentication collaborator is enabled at runtime.
#[cfg(feature = "auth")]
pub fn is_auth_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_auth, config.auth.as_ref())
}

/// Check if the mailer is enabled at runtime.
#[cfg(feature = "mailer")]
pub fn is_mailer_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_mailer, config.mailer.as_ref())
}
