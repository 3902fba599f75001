

// --- File: crates/repairtech_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod features; // Feature flag handling
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    conflict, config_error, external_service_error, field_error, internal_error, not_found,
    validation_error, Context, FieldError, HttpStatusCode, RepairTechError, ValidationErrors,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, delete, get, patch, post, HTTP_CLIENT},
    handle_json_result, handle_result, map_error, map_json_error, IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

// Conditionally re-export feature-specific functions
#[cfg(feature = "store")]
pub use features::is_store_enabled;

#[cfg(feature = "auth")]
pub use features::is_auth_enabled;

#[cfg(feature = "mailer")]
pub use features::is_mailer_enabled;
