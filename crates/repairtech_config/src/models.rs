// --- File: crates/repairtech_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Storage Collaborator Config ---
// Holds non-secret connection data for the managed table storage.
// The service key, if needed, is injected via the `secret_from_env` marker.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// Base URL of the storage REST endpoint.
    pub url: String,
    /// Publishable key sent with every request.
    pub anon_key: String,
    /// Elevated key for server-side operations. Loaded via STORE_SERVICE_KEY.
    pub service_key: Option<String>,
    /// Poll interval for the change feed, in seconds.
    pub feed_poll_secs: Option<u64>,
}

// --- Auth Collaborator Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Base URL of the authentication service.
    pub url: String,
    pub anon_key: String,
    /// Where the confirmation email should send the user back to.
    pub redirect_url: Option<String>,
}

// --- Mailer Config ---
// Holds non-secret mailer config. API key loaded directly from env var: MAILER_API_KEY.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MailerConfig {
    /// Provider endpoint; defaults to the hosted API when absent.
    pub api_url: Option<String>,
    /// Sender, e.g. "RepairTech <onboarding@resend.dev>".
    pub from: String,
    pub reply_to: Option<String>,
}

// --- Application URLs ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppUrls {
    /// Public origin of the frontend, used to build redirect targets.
    pub public_url: String,
    /// Login entry point, relative to `public_url`.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Dashboard entry point, relative to `public_url`.
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_store: bool,
    #[serde(default)]
    pub use_auth: bool,
    #[serde(default)]
    pub use_mailer: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub store: Option<StoreConfig>,
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub mailer: Option<MailerConfig>,
    #[serde(default)]
    pub app: Option<AppUrls>,
}
