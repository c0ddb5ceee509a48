// File: services/connectify_backend/src/lib.rs
use axum::Router;
use connectify_config::AppConfig;
use std::sync::Arc;
use tracing::info;

/// Builds the `/api` router from the enabled features.
#[cfg_attr(
    not(any(feature = "webhooks", feature = "app_store")),
    allow(unused_variables)
)]
pub fn app(config: Arc<AppConfig>) -> Router {
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut router = connectify_common::routes();

    #[cfg(feature = "webhooks")]
    if connectify_common::is_webhooks_enabled(&config) {
        let repository = Arc::new(connectify_webhooks::InMemoryWebhookRepository::new());
        router = router.merge(connectify_webhooks::routes(config.clone(), repository));
    } else {
        info!("Organization webhooks disabled");
    }

    #[cfg(feature = "app_store")]
    if connectify_common::is_app_store_enabled(&config) {
        router = router.merge(connectify_app_store::routes(config.clone()));
    } else {
        info!("App store disabled");
    }

    #[allow(unused_mut)]
    let mut app = Router::new().nest("/api", router);

    #[cfg(feature = "openapi")]
    {
        app = app.merge(swagger_ui());
    }

    app
}

#[cfg(feature = "openapi")]
fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Connectify API",
            version = "0.1.0",
            description = "Connectify Service API Docs",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        components(),
        tags( (name = "Connectify", description = "Core service endpoints")),
        servers( (url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut openapi_doc = ApiDoc::openapi();
    #[cfg(feature = "webhooks")]
    openapi_doc.merge(connectify_webhooks::doc::WebhooksApiDoc::openapi());
    #[cfg(feature = "app_store")]
    openapi_doc.merge(connectify_app_store::doc::AppStoreApiDoc::openapi());
    info!("Adding Swagger UI at /api/docs");

    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc)
}
