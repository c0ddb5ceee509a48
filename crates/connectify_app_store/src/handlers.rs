// --- File: crates/connectify_app_store/src/handlers.rs ---
use axum::{extract::State, response::Response, Json};
use connectify_common::{log_error, map_json_error, ConnectifyError};
use std::sync::Arc;

use crate::keys::ConfigAppKeys;
use crate::zapier::{self, ZapierSetupProps};

pub struct AppStoreState {
    pub keys: ConfigAppKeys,
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/apps/zapier/setup", // Relative to /api
    responses(
        (status = 200, description = "Zapier setup page props", body = ZapierSetupProps),
        (status = 500, description = "Stored Zapier keys are malformed")
    ),
    tag = "App Store"
))]
pub async fn zapier_setup_handler(
    State(state): State<Arc<AppStoreState>>,
) -> Result<Json<ZapierSetupProps>, Response> {
    map_json_error(zapier::setup_props(&state.keys).await, |err| {
        log_error(&err, "Failed to load Zapier setup props");
        ConnectifyError::from(err)
    })
}
