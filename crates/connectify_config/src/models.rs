// --- File: crates/connectify_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Organization Webhooks Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhooksConfig {
    /// Upper bound for the `take` query parameter when listing webhooks.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_max_page_size() -> usize {
    250
}

impl Default for WebhooksConfig {
    fn default() -> Self {
        Self {
            max_page_size: default_max_page_size(),
        }
    }
}

// --- App Store Config ---
// Keys per installed app, indexed by app slug (e.g. "zapier").
// Secret values use the "secret_from_env" marker.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppStoreConfig {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub apps: HashMap<String, serde_json::Value>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Minimum log level ("trace", "debug", "info", "warn", "error").
    #[serde(default)]
    pub log_level: Option<String>,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_webhooks: bool,
    #[serde(default)]
    pub use_app_store: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub webhooks: Option<WebhooksConfig>,
    #[serde(default)]
    pub app_store: Option<AppStoreConfig>,
}
