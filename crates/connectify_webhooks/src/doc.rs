// --- File: crates/connectify_webhooks/src/doc.rs ---
use utoipa::OpenApi;

use crate::models::{CreateWebhookInput, UpdateWebhookInput, Webhook, WebhookTrigger};

/// OpenAPI documentation for the organization webhooks API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_webhook_handler,
        crate::handlers::list_webhooks_handler,
        crate::handlers::get_webhook_handler,
        crate::handlers::update_webhook_handler,
        crate::handlers::delete_webhook_handler
    ),
    components(
        schemas(
            Webhook,
            WebhookTrigger,
            CreateWebhookInput,
            UpdateWebhookInput
        )
    ),
    tags(
        (name = "Organization Webhooks", description = "Manage webhook subscriptions owned by an organization")
    )
)]
pub struct WebhooksApiDoc;
