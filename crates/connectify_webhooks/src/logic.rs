// --- File: crates/connectify_webhooks/src/logic.rs ---

use chrono::Utc;
use http::Uri;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::WebhookError;
use crate::models::{
    CreateWebhookInput, ListWebhooksQuery, UpdateWebhookInput, Webhook, WebhookTrigger,
};
use crate::repository::WebhookRepository;

pub const DEFAULT_MAX_PAGE_SIZE: usize = 250;

/// Webhook CRUD scoped to one organization per call.
///
/// Every operation on a single webhook first checks that it exists (`NotFound`) and
/// then that it belongs to the calling organization (`Forbidden`).
#[derive(Clone)]
pub struct WebhookService {
    repository: Arc<dyn WebhookRepository>,
    max_page_size: usize,
}

impl WebhookService {
    pub fn new(repository: Arc<dyn WebhookRepository>, max_page_size: usize) -> Self {
        Self {
            repository,
            max_page_size: max_page_size.max(1),
        }
    }

    pub async fn create(
        &self,
        org_id: i64,
        input: CreateWebhookInput,
    ) -> Result<Webhook, WebhookError> {
        validate_subscriber_url(&input.subscriber_url)?;
        if input.triggers.is_empty() {
            return Err(WebhookError::Invalid(
                "at least one trigger is required".to_string(),
            ));
        }

        let webhook = Webhook {
            id: Uuid::new_v4().to_string(),
            subscriber_url: input.subscriber_url,
            triggers: dedup_triggers(input.triggers),
            active: input.active,
            payload_template: input.payload_template,
            secret: input.secret,
            team_id: org_id,
            created_at: Utc::now(),
        };

        let webhook = self.repository.insert(webhook).await?;
        info!(
            "Created webhook {} for organization {} -> {}",
            webhook.id, org_id, webhook.subscriber_url
        );
        Ok(webhook)
    }

    pub async fn get(&self, org_id: i64, webhook_id: &str) -> Result<Webhook, WebhookError> {
        let webhook = self
            .repository
            .find_by_id(webhook_id)
            .await?
            .ok_or_else(|| WebhookError::NotFound(webhook_id.to_string()))?;

        if webhook.team_id != org_id {
            return Err(WebhookError::Forbidden {
                webhook_id: webhook_id.to_string(),
                org_id,
            });
        }
        Ok(webhook)
    }

    pub async fn list(
        &self,
        org_id: i64,
        query: ListWebhooksQuery,
    ) -> Result<Vec<Webhook>, WebhookError> {
        let take = query
            .take
            .unwrap_or(self.max_page_size)
            .min(self.max_page_size);
        let skip = query.skip.unwrap_or(0);

        let webhooks: Vec<Webhook> = self
            .repository
            .find_by_team(org_id)
            .await?
            .into_iter()
            .skip(skip)
            .take(take)
            .collect();

        debug!(
            "Listed {} webhooks for organization {} (skip {}, take {})",
            webhooks.len(),
            org_id,
            skip,
            take
        );
        Ok(webhooks)
    }

    pub async fn update(
        &self,
        org_id: i64,
        webhook_id: &str,
        input: UpdateWebhookInput,
    ) -> Result<Webhook, WebhookError> {
        // team ownership never changes, so checking it before the write is enough
        self.get(org_id, webhook_id).await?;

        if let Some(subscriber_url) = &input.subscriber_url {
            validate_subscriber_url(subscriber_url)?;
        }
        let triggers = match input.triggers {
            Some(triggers) if triggers.is_empty() => {
                return Err(WebhookError::Invalid(
                    "at least one trigger is required".to_string(),
                ));
            }
            triggers => triggers.map(dedup_triggers),
        };
        let changes = UpdateWebhookInput { triggers, ..input };

        let webhook = self.repository.update(webhook_id, changes).await?;
        info!("Updated webhook {} for organization {}", webhook.id, org_id);
        Ok(webhook)
    }

    pub async fn delete(&self, org_id: i64, webhook_id: &str) -> Result<Webhook, WebhookError> {
        self.get(org_id, webhook_id).await?;

        let webhook = self
            .repository
            .delete(webhook_id)
            .await?
            .ok_or_else(|| WebhookError::NotFound(webhook_id.to_string()))?;
        info!("Deleted webhook {} for organization {}", webhook.id, org_id);
        Ok(webhook)
    }
}

/// Subscriber URLs must be absolute `http`/`https` URIs with a host.
pub fn validate_subscriber_url(subscriber_url: &str) -> Result<(), WebhookError> {
    let uri: Uri = subscriber_url
        .parse()
        .map_err(|err| WebhookError::Invalid(format!("subscriberUrl '{subscriber_url}': {err}")))?;

    let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
    let has_host = uri.host().is_some_and(|host| !host.is_empty());
    if !scheme_ok || !has_host {
        return Err(WebhookError::Invalid(format!(
            "subscriberUrl '{subscriber_url}' must be an absolute http(s) URL"
        )));
    }
    Ok(())
}

fn dedup_triggers(triggers: Vec<WebhookTrigger>) -> Vec<WebhookTrigger> {
    let mut unique = Vec::with_capacity(triggers.len());
    for trigger in triggers {
        if !unique.contains(&trigger) {
            unique.push(trigger);
        }
    }
    unique
}
