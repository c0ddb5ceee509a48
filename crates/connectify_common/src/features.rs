//! Feature flag handling for the Connectify application.
//!
//! Feature flags are used in two ways:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values
//!
//! ## Available Features
//!
//! - `openapi`: Enables OpenAPI documentation generation
//! - `webhooks`: Enables the organization webhooks API
//! - `app_store`: Enables the app-store setup endpoints
//!
//! A feature is live only when it is compiled in, its `use_*` flag is set and,
//! where the feature has one, its configuration section is present.

#[cfg(any(feature = "webhooks", feature = "app_store"))]
use connectify_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the organization webhooks API is enabled at runtime.
///
/// The webhooks section is optional; the flag alone turns the API on.
#[cfg(feature = "webhooks")]
pub fn is_webhooks_enabled(config: &AppConfig) -> bool {
    config.use_webhooks
}

/// Check if the app-store endpoints are enabled at runtime.
#[cfg(feature = "app_store")]
pub fn is_app_store_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_app_store, config.app_store.as_ref())
}
