// --- File: crates/connectify_webhooks/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events a subscriber can be notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookTrigger {
    BookingCreated,
    BookingRescheduled,
    BookingCancelled,
    BookingRequested,
    BookingRejected,
    BookingPaid,
    BookingNoShowUpdated,
    MeetingStarted,
    MeetingEnded,
    RecordingReady,
    FormSubmitted,
    InstantMeeting,
    OooCreated,
}

/// A webhook subscription owned by an organization (team).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[cfg_attr(feature = "openapi", schema(example = "0f8fad5b-d9cb-469f-a165-70867728950e"))]
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(example = "https://example.com/hooks/bookings"))]
    pub subscriber_url: String,
    pub triggers: Vec<WebhookTrigger>,
    pub active: bool,
    pub payload_template: Option<String>,
    /// Signing secret; accepted on input, never echoed back.
    #[serde(skip_serializing, default)]
    pub secret: Option<String>,
    pub team_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookInput {
    pub subscriber_url: String,
    pub triggers: Vec<WebhookTrigger>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub payload_template: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookInput {
    #[serde(default)]
    pub subscriber_url: Option<String>,
    #[serde(default)]
    pub triggers: Option<Vec<WebhookTrigger>>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub payload_template: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
}

impl UpdateWebhookInput {
    /// Copies every provided field onto `webhook`.
    pub fn apply_to(self, webhook: &mut Webhook) {
        if let Some(subscriber_url) = self.subscriber_url {
            webhook.subscriber_url = subscriber_url;
        }
        if let Some(triggers) = self.triggers {
            webhook.triggers = triggers;
        }
        if let Some(active) = self.active {
            webhook.active = active;
        }
        if let Some(payload_template) = self.payload_template {
            webhook.payload_template = Some(payload_template);
        }
        if let Some(secret) = self.secret {
            webhook.secret = Some(secret);
        }
    }
}

/// Pagination for the list endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ListWebhooksQuery {
    /// Maximum number of webhooks to return.
    pub take: Option<usize>,
    /// Number of webhooks to skip.
    pub skip: Option<usize>,
}
