//! Storage for organization webhooks.
//!
//! The service talks to storage through [`WebhookRepository`] so a database-backed
//! implementation can replace the in-memory one without touching handlers.

use connectify_common::services::BoxFuture;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::WebhookError;
use crate::models::{UpdateWebhookInput, Webhook};

/// Persistence operations for webhooks.
///
/// `insert` and `update` enforce that a team has at most one webhook per subscriber
/// URL and fail with [`WebhookError::DuplicateSubscriber`] otherwise.
pub trait WebhookRepository: Send + Sync {
    fn insert(&self, webhook: Webhook) -> BoxFuture<'_, Webhook, WebhookError>;

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Webhook>, WebhookError>;

    /// All webhooks of a team, oldest first.
    fn find_by_team(&self, team_id: i64) -> BoxFuture<'_, Vec<Webhook>, WebhookError>;

    /// Applies the given fields to the stored webhook and returns the result.
    ///
    /// Fields left `None` keep their stored value, even if another update landed
    /// since the caller last read the webhook.
    fn update(&self, id: &str, changes: UpdateWebhookInput) -> BoxFuture<'_, Webhook, WebhookError>;

    /// Removes a webhook, returning it if it existed.
    fn delete(&self, id: &str) -> BoxFuture<'_, Option<Webhook>, WebhookError>;
}

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryWebhookRepository {
    webhooks: RwLock<HashMap<String, Webhook>>,
}

impl InMemoryWebhookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_unique_url(
        webhooks: &HashMap<String, Webhook>,
        candidate: &Webhook,
    ) -> Result<(), WebhookError> {
        let taken = webhooks.values().any(|existing| {
            existing.id != candidate.id
                && existing.team_id == candidate.team_id
                && existing.subscriber_url == candidate.subscriber_url
        });
        if taken {
            return Err(WebhookError::DuplicateSubscriber {
                org_id: candidate.team_id,
                subscriber_url: candidate.subscriber_url.clone(),
            });
        }
        Ok(())
    }
}

impl WebhookRepository for InMemoryWebhookRepository {
    fn insert(&self, webhook: Webhook) -> BoxFuture<'_, Webhook, WebhookError> {
        Box::pin(async move {
            let mut webhooks = self.webhooks.write().await;
            if webhooks.contains_key(&webhook.id) {
                return Err(WebhookError::Storage(format!(
                    "webhook id {} already exists",
                    webhook.id
                )));
            }
            Self::ensure_unique_url(&webhooks, &webhook)?;
            webhooks.insert(webhook.id.clone(), webhook.clone());
            debug!("Stored webhook {} ({} total)", webhook.id, webhooks.len());
            Ok(webhook)
        })
    }

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Webhook>, WebhookError> {
        let id = id.to_string();
        Box::pin(async move { Ok(self.webhooks.read().await.get(&id).cloned()) })
    }

    fn find_by_team(&self, team_id: i64) -> BoxFuture<'_, Vec<Webhook>, WebhookError> {
        Box::pin(async move {
            let mut owned: Vec<Webhook> = self
                .webhooks
                .read()
                .await
                .values()
                .filter(|webhook| webhook.team_id == team_id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
            Ok(owned)
        })
    }

    fn update(&self, id: &str, changes: UpdateWebhookInput) -> BoxFuture<'_, Webhook, WebhookError> {
        let id = id.to_string();
        Box::pin(async move {
            let mut webhooks = self.webhooks.write().await;
            let mut webhook = webhooks
                .get(&id)
                .cloned()
                .ok_or_else(|| WebhookError::NotFound(id.clone()))?;
            changes.apply_to(&mut webhook);
            Self::ensure_unique_url(&webhooks, &webhook)?;
            webhooks.insert(id, webhook.clone());
            Ok(webhook)
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, Option<Webhook>, WebhookError> {
        let id = id.to_string();
        Box::pin(async move { Ok(self.webhooks.write().await.remove(&id)) })
    }
}
