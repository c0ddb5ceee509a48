#[cfg(test)]
mod tests {
    use crate::booking::{
        BookingCreateBody, BookingUser, BookingValidationError, CustomInputValue,
    };
    use crate::name_field::{resolve, FieldDescriptor, NameResponse};
    use chrono::{TimeZone, Utc};
    use connectify_common::{ConnectifyError, HttpStatusCode};
    use serde_json::{json, Value};

    fn sample_body() -> Value {
        json!({
            "email": "jane@example.com",
            "start": "2025-05-05T09:00:00+02:00",
            "end": "2025-05-05T09:30:00+02:00",
            "eventTypeId": 42,
            "eventTypeSlug": "intro-call",
            "guests": ["guest@example.com"],
            "location": "integrations:daily",
            "name": "Jane Doe",
            "timeZone": "Europe/Zurich",
            "user": "holger",
            "language": "en",
            "customInputs": [
                { "label": "Company", "value": "Acme" },
                { "label": "Agreed to terms", "value": true }
            ],
            "metadata": { "utm_source": "newsletter" },
            "hasHashedBookingLink": false,
            "hashedLink": null
        })
    }

    fn parse(value: Value) -> BookingCreateBody {
        serde_json::from_value(value).expect("valid booking body")
    }

    #[test]
    fn test_parses_wire_format() {
        let body = parse(sample_body());

        assert_eq!(body.event_type_id, 42);
        assert_eq!(body.start, Utc.with_ymd_and_hms(2025, 5, 5, 7, 0, 0).unwrap());
        assert_eq!(body.time_zone, chrono_tz::Europe::Zurich);
        assert_eq!(body.user, Some(BookingUser::Single("holger".to_string())));
        assert_eq!(body.custom_inputs[1].value, CustomInputValue::Flag(true));
        assert_eq!(body.metadata["utm_source"], "newsletter");
        assert!(body.hashed_link.is_none());
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_time_zone() {
        let mut value = sample_body();
        value["timeZone"] = json!("Mars/Olympus_Mons");
        assert!(serde_json::from_value::<BookingCreateBody>(value).is_err());
    }

    #[test]
    fn test_usernames_for_single_and_group_bookings() {
        let body = parse(sample_body());
        assert_eq!(body.usernames(), vec!["holger"]);

        let mut value = sample_body();
        value["user"] = json!(["holger", "anna"]);
        assert_eq!(parse(value).usernames(), vec!["holger", "anna"]);

        let mut value = sample_body();
        value.as_object_mut().unwrap().remove("user");
        assert!(parse(value).usernames().is_empty());
    }

    #[test]
    fn test_reschedule_detection() {
        assert!(!parse(sample_body()).is_reschedule());

        let mut value = sample_body();
        value["rescheduleUid"] = json!("");
        assert!(!parse(value).is_reschedule());

        let mut value = sample_body();
        value["rescheduleUid"] = json!("bk_123");
        assert!(parse(value).is_reschedule());
    }

    #[test]
    fn test_stored_name_locks_full_name_field_on_reschedule() {
        let mut value = sample_body();
        value["rescheduleUid"] = json!("bk_123");
        let body = parse(value);

        let field: FieldDescriptor = serde_json::from_value(json!({
            "variant": "fullName",
            "variantsConfig": { "variants": {} }
        }))
        .unwrap();

        assert_eq!(body.name_response(), NameResponse::from("Jane Doe"));
        assert!(resolve(&field, &body.name_response(), body.is_reschedule(), false));
    }

    #[test]
    fn test_validation_errors() {
        let mut value = sample_body();
        value["end"] = json!("2025-05-05T08:00:00+02:00");
        assert_eq!(parse(value).validate(), Err(BookingValidationError::EndBeforeStart));

        let mut value = sample_body();
        value["email"] = json!("not-an-email");
        assert_eq!(
            parse(value).validate(),
            Err(BookingValidationError::InvalidEmail("not-an-email".to_string()))
        );

        let mut value = sample_body();
        value["name"] = json!("   ");
        assert_eq!(parse(value).validate(), Err(BookingValidationError::MissingName));

        let mut value = sample_body();
        value["guests"] = json!(["ok@example.com", "@example.com"]);
        assert_eq!(
            parse(value).validate(),
            Err(BookingValidationError::InvalidGuestEmail("@example.com".to_string()))
        );

        let mut value = sample_body();
        value["hasHashedBookingLink"] = json!(true);
        assert_eq!(parse(value).validate(), Err(BookingValidationError::MissingHashedLink));

        let mut value = sample_body();
        value["hasHashedBookingLink"] = json!(true);
        value["hashedLink"] = json!("h4sh");
        assert!(parse(value).validate().is_ok());
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err: ConnectifyError = BookingValidationError::MissingName.into();
        assert_eq!(err.status_code(), 400);
    }
}
