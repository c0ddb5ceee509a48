// --- File: crates/connectify_webhooks/src/routes.rs ---
use axum::{routing::get, Router};
use connectify_config::AppConfig;
use std::sync::Arc;
use tracing::info;

use crate::handlers::{
    create_webhook_handler, delete_webhook_handler, get_webhook_handler, list_webhooks_handler,
    update_webhook_handler, WebhooksState,
};
use crate::logic::{WebhookService, DEFAULT_MAX_PAGE_SIZE};
use crate::repository::WebhookRepository;

/// Create the organization webhook routes.
///
/// # Arguments
///
/// * `config` - Application configuration; `webhooks.max_page_size` bounds list pages
/// * `repository` - Storage shared by every request
pub fn routes(config: Arc<AppConfig>, repository: Arc<dyn WebhookRepository>) -> Router {
    let max_page_size = config
        .webhooks
        .as_ref()
        .map(|webhooks| webhooks.max_page_size)
        .unwrap_or(DEFAULT_MAX_PAGE_SIZE);

    let state = Arc::new(WebhooksState {
        service: WebhookService::new(repository, max_page_size),
    });

    info!("Organization webhook routes initialized (max page size {})", max_page_size);

    Router::new()
        .route(
            "/organizations/{org_id}/webhooks",
            get(list_webhooks_handler).post(create_webhook_handler),
        )
        .route(
            "/organizations/{org_id}/webhooks/{webhook_id}",
            get(get_webhook_handler)
                .patch(update_webhook_handler)
                .delete(delete_webhook_handler),
        )
        .with_state(state)
}
