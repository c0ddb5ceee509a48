// --- File: crates/connectify_webhooks/src/error.rs ---
use connectify_common::{conflict, forbidden, not_found, validation_error, ConnectifyError, HttpStatusCode};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Webhook {0} not found")]
    NotFound(String),

    #[error("Webhook {webhook_id} does not belong to organization {org_id}")]
    Forbidden { webhook_id: String, org_id: i64 },

    #[error("Organization {org_id} already has a webhook for {subscriber_url}")]
    DuplicateSubscriber { org_id: i64, subscriber_url: String },

    #[error("Invalid webhook: {0}")]
    Invalid(String),

    #[error("Webhook storage failed: {0}")]
    Storage(String),
}

impl From<WebhookError> for ConnectifyError {
    fn from(err: WebhookError) -> Self {
        match err {
            WebhookError::NotFound(_) => not_found(err),
            WebhookError::Forbidden { .. } => forbidden(err),
            WebhookError::DuplicateSubscriber { .. } => conflict(err),
            WebhookError::Invalid(msg) => validation_error(msg),
            WebhookError::Storage(msg) => ConnectifyError::StorageError(msg),
        }
    }
}

impl HttpStatusCode for WebhookError {
    fn status_code(&self) -> u16 {
        match self {
            WebhookError::NotFound(_) => 404,
            WebhookError::Forbidden { .. } => 403,
            WebhookError::DuplicateSubscriber { .. } => 409,
            WebhookError::Invalid(_) => 400,
            WebhookError::Storage(_) => 500,
        }
    }
}
