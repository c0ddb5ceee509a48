// --- File: crates/connectify_booker/src/booking.rs ---
//! Request body for creating (or rescheduling) a booking.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use connectify_common::ConnectifyError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::name_field::NameResponse;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingValidationError {
    #[error("Booking must end after it starts")]
    EndBeforeStart,
    #[error("Invalid attendee email: {0}")]
    InvalidEmail(String),
    #[error("Invalid guest email: {0}")]
    InvalidGuestEmail(String),
    #[error("Attendee name must not be empty")]
    MissingName,
    #[error("A hashed booking link was announced but none was provided")]
    MissingHashedLink,
}

impl From<BookingValidationError> for ConnectifyError {
    fn from(err: BookingValidationError) -> Self {
        ConnectifyError::ValidationError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Web3Details {
    pub user_wallet: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub user_signature: serde_json::Value,
}

/// Organizer(s) addressed by the booking: one username or several (dynamic group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum BookingUser {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum CustomInputValue {
    Flag(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CustomInput {
    pub label: String,
    pub value: CustomInputValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingCreateBody {
    pub email: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web3_details: Option<Web3Details>,
    pub event_type_id: i64,
    pub event_type_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<String>>,
    pub location: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reschedule_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_event_id: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "Europe/Zurich"))]
    pub time_zone: Tz,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<BookingUser>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_uid: Option<String>,
    #[serde(default)]
    pub custom_inputs: Vec<CustomInput>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub has_hashed_booking_link: bool,
    #[serde(default)]
    pub hashed_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_reminder_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth_signature: Option<String>,
}

impl BookingCreateBody {
    /// True when this body changes an existing booking.
    pub fn is_reschedule(&self) -> bool {
        self.reschedule_uid
            .as_deref()
            .is_some_and(|uid| !uid.trim().is_empty())
    }

    /// Stored attendee name, as the booker form's name response.
    pub fn name_response(&self) -> NameResponse {
        NameResponse::Text(self.name.clone())
    }

    pub fn usernames(&self) -> Vec<&str> {
        match &self.user {
            Some(BookingUser::Single(user)) => vec![user.as_str()],
            Some(BookingUser::Many(users)) => users.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Structural checks that need no lookup of the event type.
    pub fn validate(&self) -> Result<(), BookingValidationError> {
        let result = self.check();
        if let Err(err) = &result {
            debug!("Rejected booking body for {}: {}", self.event_type_slug, err);
        }
        result
    }

    fn check(&self) -> Result<(), BookingValidationError> {
        if self.end <= self.start {
            return Err(BookingValidationError::EndBeforeStart);
        }
        if !looks_like_email(&self.email) {
            return Err(BookingValidationError::InvalidEmail(self.email.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(BookingValidationError::MissingName);
        }
        if let Some(guest) = self
            .guests
            .iter()
            .flatten()
            .find(|guest| !looks_like_email(guest))
        {
            return Err(BookingValidationError::InvalidGuestEmail(guest.clone()));
        }
        if self.has_hashed_booking_link
            && self.hashed_link.as_deref().map_or(true, |link| link.is_empty())
        {
            return Err(BookingValidationError::MissingHashedLink);
        }
        Ok(())
    }
}

fn looks_like_email(candidate: &str) -> bool {
    match candidate.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
