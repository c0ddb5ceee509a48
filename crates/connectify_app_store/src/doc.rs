// --- File: crates/connectify_app_store/src/doc.rs ---
use utoipa::OpenApi;

use crate::zapier::ZapierSetupProps;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::zapier_setup_handler),
    components(schemas(ZapierSetupProps)),
    tags(
        (name = "App Store", description = "Setup data for installed third-party apps")
    )
)]
pub struct AppStoreApiDoc;
