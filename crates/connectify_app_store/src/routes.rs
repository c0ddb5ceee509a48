// --- File: crates/connectify_app_store/src/routes.rs ---
use axum::{routing::get, Router};
use connectify_config::AppConfig;
use std::sync::Arc;

use crate::handlers::{zapier_setup_handler, AppStoreState};
use crate::keys::ConfigAppKeys;

/// Create the app store routes, backed by the keys in `app_store.apps`.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(AppStoreState {
        keys: ConfigAppKeys::from_config(&config),
    });

    Router::new()
        .route("/apps/zapier/setup", get(zapier_setup_handler))
        .with_state(state)
}
