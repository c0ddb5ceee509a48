// --- File: crates/connectify_common/src/lib.rs ---

pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared response shapes
pub mod routes; // Shared routes
pub mod services; // Service abstractions

pub use routes::routes;

pub use error::{
    config_error, conflict, forbidden, not_found, validation_error, ConnectifyError, Context,
    HttpStatusCode,
};

pub use http::{
    map_json_error, respond_with, ApiJson, ApiPath, ApiQuery, ApiResult, IntoHttpResponse,
};

pub use logging::{init_with_level, log_error, log_result, parse_level};

pub use models::{ApiResponse, ResponseStatus};

pub use features::is_feature_enabled;

#[cfg(feature = "webhooks")]
pub use features::is_webhooks_enabled;

#[cfg(feature = "app_store")]
pub use features::is_app_store_enabled;
