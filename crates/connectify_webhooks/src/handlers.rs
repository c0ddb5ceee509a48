// --- File: crates/connectify_webhooks/src/handlers.rs ---
use axum::{extract::State, http::StatusCode};
#[cfg(feature = "openapi")]
use connectify_common::ApiResponse;
use connectify_common::{log_result, respond_with, ApiJson, ApiPath, ApiQuery, ApiResult};
use std::sync::Arc;

use crate::logic::WebhookService;
use crate::models::{CreateWebhookInput, ListWebhooksQuery, UpdateWebhookInput, Webhook};

// State for webhook handlers
#[derive(Clone)]
pub struct WebhooksState {
    pub service: WebhookService,
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/organizations/{org_id}/webhooks", // Relative to /api
    params(("org_id" = i64, Path, description = "Organization id")),
    request_body = CreateWebhookInput,
    responses(
        (status = 201, description = "Webhook created", body = ApiResponse<Webhook>),
        (status = 400, description = "Invalid subscriber URL or triggers"),
        (status = 409, description = "Organization already has a webhook for this subscriber URL")
    ),
    tag = "Organization Webhooks"
))]
pub async fn create_webhook_handler(
    State(state): State<Arc<WebhooksState>>,
    ApiPath(org_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CreateWebhookInput>,
) -> ApiResult<Webhook> {
    let result = log_result(
        state.service.create(org_id, payload).await,
        "Webhook created",
        "Webhook creation rejected",
    );
    respond_with(StatusCode::CREATED, result)
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/organizations/{org_id}/webhooks",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ListWebhooksQuery
    ),
    responses(
        (status = 200, description = "Webhooks of the organization", body = ApiResponse<Vec<Webhook>>),
        (status = 400, description = "Malformed organization id or pagination parameters")
    ),
    tag = "Organization Webhooks"
))]
pub async fn list_webhooks_handler(
    State(state): State<Arc<WebhooksState>>,
    ApiPath(org_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<ListWebhooksQuery>,
) -> ApiResult<Vec<Webhook>> {
    respond_with(StatusCode::OK, state.service.list(org_id, query).await)
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/organizations/{org_id}/webhooks/{webhook_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("webhook_id" = String, Path, description = "Webhook id")
    ),
    responses(
        (status = 200, description = "The webhook", body = ApiResponse<Webhook>),
        (status = 400, description = "Malformed organization id"),
        (status = 403, description = "Webhook belongs to another organization"),
        (status = 404, description = "Webhook not found")
    ),
    tag = "Organization Webhooks"
))]
pub async fn get_webhook_handler(
    State(state): State<Arc<WebhooksState>>,
    ApiPath((org_id, webhook_id)): ApiPath<(i64, String)>,
) -> ApiResult<Webhook> {
    respond_with(StatusCode::OK, state.service.get(org_id, &webhook_id).await)
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/organizations/{org_id}/webhooks/{webhook_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("webhook_id" = String, Path, description = "Webhook id")
    ),
    request_body = UpdateWebhookInput,
    responses(
        (status = 200, description = "Webhook updated", body = ApiResponse<Webhook>),
        (status = 400, description = "Invalid subscriber URL or triggers"),
        (status = 403, description = "Webhook belongs to another organization"),
        (status = 404, description = "Webhook not found"),
        (status = 409, description = "Organization already has a webhook for this subscriber URL")
    ),
    tag = "Organization Webhooks"
))]
pub async fn update_webhook_handler(
    State(state): State<Arc<WebhooksState>>,
    ApiPath((org_id, webhook_id)): ApiPath<(i64, String)>,
    ApiJson(payload): ApiJson<UpdateWebhookInput>,
) -> ApiResult<Webhook> {
    let result = log_result(
        state.service.update(org_id, &webhook_id, payload).await,
        "Webhook updated",
        "Webhook update rejected",
    );
    respond_with(StatusCode::OK, result)
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/organizations/{org_id}/webhooks/{webhook_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("webhook_id" = String, Path, description = "Webhook id")
    ),
    responses(
        (status = 200, description = "Webhook deleted, returns the removed webhook", body = ApiResponse<Webhook>),
        (status = 400, description = "Malformed organization id"),
        (status = 403, description = "Webhook belongs to another organization"),
        (status = 404, description = "Webhook not found")
    ),
    tag = "Organization Webhooks"
))]
pub async fn delete_webhook_handler(
    State(state): State<Arc<WebhooksState>>,
    ApiPath((org_id, webhook_id)): ApiPath<(i64, String)>,
) -> ApiResult<Webhook> {
    let result = log_result(
        state.service.delete(org_id, &webhook_id).await,
        "Webhook deleted",
        "Webhook deletion rejected",
    );
    respond_with(StatusCode::OK, result)
}
