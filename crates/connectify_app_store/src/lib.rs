// --- File: crates/connectify_app_store/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod error;
pub mod handlers;
pub mod keys;
#[cfg(test)]
mod keys_test;
pub mod routes;
pub mod zapier;

pub use error::AppStoreError;
pub use keys::ConfigAppKeys;
pub use routes::routes;
pub use zapier::{setup_props, ZapierSetupProps};
